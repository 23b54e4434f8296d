//! Timestamp and version marker embedded in generated banners.

use chrono::{DateTime, TimeZone};

/// The moment and tool version a generation pass is attributed to.
///
/// Banners only ever read the stamp, so two passes with the same stamp
/// render byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStamp {
    timestamp: String,
    version: String,
}

impl GenerationStamp {
    const FORMAT: &'static str = "%H:%M:%S on %m-%d-%Y";

    /// Stamp with the local wall clock and this crate's version.
    pub fn now() -> Self {
        Self::at(&chrono::Local::now())
    }

    /// Stamp with a specific instant.
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: instant.format(Self::FORMAT).to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Stamp with pre-formatted values.
    pub fn fixed(timestamp: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            version: version.into(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_stamp_format() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let stamp = GenerationStamp::at(&instant);

        assert_eq!(stamp.timestamp(), "14:05:07 on 03-09-2024");
        assert_eq!(stamp.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_fixed_stamp() {
        let stamp = GenerationStamp::fixed("00:00:00 on 01-01-2000", "9.9.9");
        assert_eq!(stamp, GenerationStamp::fixed("00:00:00 on 01-01-2000", "9.9.9"));
    }
}
