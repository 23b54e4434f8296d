//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, Manifest, Result,
    error::SourceContext,
    validate::{find_key_span, find_value_span},
};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "lanebridge.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a lanebridge.toml file; relative paths resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut manifest = parse_manifest(&content, &path.display().to_string())?;
        let absolute = std::path::absolute(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        manifest.root = match absolute.parent() {
            Some(parent) => parent.to_path_buf(),
            None => absolute,
        };
        Ok(manifest)
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if !manifest.runner.build_command.contains("{project}") {
        return Err(ctx.missing_placeholder_error(find_key_span(ctx.src(), "build_command")));
    }

    for file in manifest.tools.config_files.iter().flatten() {
        let lower = file.to_ascii_lowercase();
        if lower.len() <= "file".len() || !lower.ends_with("file") {
            return Err(ctx.invalid_tool_file_error(file, find_value_span(ctx.src(), file)));
        }
    }

    for (action, keys) in &manifest.ignore {
        if keys.iter().any(|key| key.trim().is_empty()) {
            return Err(ctx.validation_error(
                format!("empty option key in ignore rules for '{}'", action),
                find_key_span(ctx.src(), action),
            ));
        }
    }

    Ok(())
}
