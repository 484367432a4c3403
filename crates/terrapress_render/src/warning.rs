//! Structured warnings recorded during assembly.

use std::fmt;

use terrapress_catalog::FragmentKind;

/// A non-fatal problem encountered while assembling a document.
///
/// Warnings never change the outcome of a run; the offending fragment
/// is dropped and generation continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A profile referenced a fragment the catalog does not contain.
    MissingFragment { kind: FragmentKind, name: String },
}

impl RenderWarning {
    /// The fragment name this warning is about.
    pub fn fragment_name(&self) -> &str {
        match self {
            RenderWarning::MissingFragment { name, .. } => name,
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::MissingFragment { kind, name } => {
                write!(f, "{} '{}' not found in catalog, skipping", kind, name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_fragment() {
        let warning = RenderWarning::MissingFragment {
            kind: FragmentKind::Component,
            name: "cdn".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "component 'cdn' not found in catalog, skipping"
        );
    }
}
