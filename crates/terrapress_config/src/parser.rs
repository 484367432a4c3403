//! Line-oriented `.env` file parsing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigResult;
use crate::settings::ConfigSet;

/// Parser for `.env`-style configuration files.
///
/// The format is line-oriented `KEY=VALUE` with `#` comments and
/// optional single or double quoting around the value. A missing file
/// is not an error: the built-in defaults are used as-is.
pub struct EnvParser {
    path: PathBuf,
}

impl EnvParser {
    /// Create a parser for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file into a fully resolved [`ConfigSet`].
    pub fn parse(&self) -> ConfigResult<ConfigSet> {
        let mut config = ConfigSet::defaults();

        if self.path.exists() {
            info!("Reading configuration from {:?}", self.path);
            let content = fs::read_to_string(&self.path)?;
            for line in content.lines() {
                apply_line(&mut config, line);
            }
        } else {
            debug!("No configuration file at {:?}, using defaults", self.path);
        }

        config.apply_derivations();
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Apply one raw line to the configuration set.
///
/// Blank lines, comments, and lines without a `=` separator are
/// silently skipped.
fn apply_line(config: &mut ConfigSet, line: &str) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let Some((key, value)) = line.split_once('=') else {
        debug!("Skipping malformed line: {}", line);
        return;
    };

    let key = key.trim();
    let value = strip_quotes(value.trim());
    config.apply_override(key, value);
}

/// Strip one pair of matching surrounding quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ConfigValue;

    fn parse_lines(lines: &[&str]) -> ConfigSet {
        let mut config = ConfigSet::defaults();
        for line in lines {
            apply_line(&mut config, line);
        }
        config.apply_derivations();
        config
    }

    #[test]
    fn test_basic_override() {
        let config = parse_lines(&["AWS_REGION=eu-west-3"]);
        assert_eq!(config.render("aws_region"), "eu-west-3");
    }

    #[test]
    fn test_quotes_are_stripped() {
        let config = parse_lines(&[
            r#"PROJECT_NAME="my-blog""#,
            "ENVIRONMENT='prod'",
        ]);
        assert_eq!(config.render("project_name"), "my-blog");
        assert_eq!(config.render("environment"), "prod");
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        let config = parse_lines(&[r#"PROJECT_NAME="my-blog'"#]);
        assert_eq!(config.render("project_name"), r#""my-blog'"#);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let config = parse_lines(&["# AWS_REGION=ignored", "", "   "]);
        assert_eq!(config.render("aws_region"), "us-east-1");
    }

    #[test]
    fn test_malformed_line_skipped() {
        let config = parse_lines(&["THIS LINE HAS NO SEPARATOR"]);
        assert!(config.get("this line has no separator").is_none());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let config = parse_lines(&["WORDPRESS_SITE_TITLE=a=b=c"]);
        assert_eq!(config.render("wordpress_site_title"), "a=b=c");
    }

    #[test]
    fn test_whitespace_trimmed_around_key_and_value() {
        let config = parse_lines(&["  INSTANCE_TYPE  =  t3.small  "]);
        assert_eq!(config.render("instance_type"), "t3.small");
    }

    #[test]
    fn test_integer_coercion_through_line() {
        let config = parse_lines(&["MAX_INSTANCES=9"]);
        assert_eq!(config.get("max_instances"), Some(&ConfigValue::Int(9)));
    }
}
