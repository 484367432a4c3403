//! The fragment registry.

use std::fmt;

use crate::{components, outputs, variables};

/// Namespace a fragment belongs to.
///
/// The namespaces are closed: a lookup always names one of the three,
/// so a miss is an explicit, checked case instead of a stringly-typed
/// dictionary miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Resource blocks assembled into `main.tf`.
    Component,
    /// Input declaration blocks assembled into `variables.tf`.
    VariableSection,
    /// Result declaration blocks appended to `main.tf`.
    Output,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FragmentKind::Component => "component",
            FragmentKind::VariableSection => "variable section",
            FragmentKind::Output => "output",
        };
        f.write_str(label)
    }
}

/// A single named, immutable block of template text.
///
/// Identity is the (kind, name) pair. Bodies may contain `{key}`
/// placeholders for configuration values; placeholder names never
/// overlap as substrings of one another.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub name: &'static str,
    pub body: &'static str,
}

/// Read-only registry of fragments, enumerable in declaration order.
#[derive(Debug, Default)]
pub struct FragmentCatalog {
    fragments: Vec<Fragment>,
}

impl FragmentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog of all built-in fragments.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        components::register(&mut catalog);
        variables::register(&mut catalog);
        outputs::register(&mut catalog);
        catalog
    }

    /// Register a fragment. Duplicate identities are not rejected;
    /// `get` returns the first match. Built-in names are unique.
    pub fn register(&mut self, kind: FragmentKind, name: &'static str, body: &'static str) {
        self.fragments.push(Fragment { kind, name, body });
    }

    /// Look up a fragment by namespace and name.
    pub fn get(&self, kind: FragmentKind, name: &str) -> Option<&Fragment> {
        self.fragments
            .iter()
            .find(|f| f.kind == kind && f.name == name)
    }

    /// Iterate over all fragments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Iterate over the fragment names of one namespace.
    pub fn names(&self, kind: FragmentKind) -> impl Iterator<Item = &'static str> + '_ {
        self.fragments
            .iter()
            .filter(move |f| f.kind == kind)
            .map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
