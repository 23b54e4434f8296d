//! Locating manifest entries in the TOML source for diagnostics.

use miette::SourceSpan;

/// Span of a `key = ...` assignment's key.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        offset += line.len();
    }
    None
}

/// Span of a quoted string value, quotes included.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|quoted| {
            src.find(quoted.as_str())
                .map(|pos| SourceSpan::from((pos, quoted.len())))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[runner]\n  build_command = \"make\"\n";
        let span = find_key_span(src, "build_command").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), 13);
    }

    #[test]
    fn test_find_key_span_ignores_prefixes() {
        let src = "build_command_extra = 1\nbuild_command= \"x\"\n";
        let span = find_key_span(src, "build_command").unwrap();
        assert_eq!(span.offset(), 24);
    }

    #[test]
    fn test_find_value_span() {
        let src = "config_files = ['Gym', \"Scanfile\"]";
        let span = find_value_span(src, "Gym").unwrap();
        assert_eq!(span.offset(), 16);
        assert_eq!(span.len(), 5);
        assert!(find_value_span(src, "Matchfile").is_none());
    }
}
