//! Placeholder substitution.

use regex::Regex;
use terrapress_config::ConfigSet;

/// Replaces `{key}` placeholders with rendered configuration values.
///
/// The template is scanned in a single pass with a compiled pattern, so
/// substitution cost is linear in template length and independent of
/// how many keys the configuration set holds. Tokens whose key is not
/// in the set are left untouched; Terraform-native `${...}`
/// interpolations never match the pattern and pass through as-is.
pub struct Substitutor {
    placeholder: Regex,
}

impl Default for Substitutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Substitutor {
    /// Create a new substitutor.
    pub fn new() -> Self {
        Self {
            // Match {key} tokens: lowercase identifier between braces.
            placeholder: Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap(),
        }
    }

    /// Substitute every placeholder that resolves in `values`.
    pub fn substitute(&self, template: &str, values: &ConfigSet) -> String {
        self.placeholder
            .replace_all(template, |caps: &regex::Captures| {
                let key = &caps[1];
                match values.get(key) {
                    Some(value) => value.render(),
                    // Intentional passthrough: unknown keys stay literal.
                    None => caps[0].to_string(),
                }
            })
            .to_string()
    }
}
