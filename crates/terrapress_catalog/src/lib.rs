//! # terrapress_catalog
//!
//! Static catalogs for terrapress: the Terraform text fragments and the
//! deployment profiles that select and order them.
//!
//! Both catalogs are pure, read-only lookup tables built once at process
//! start. Enumeration order is declaration order, which drives the
//! numbered menu in the CLI.
//!
//! ## Example
//!
//! ```rust
//! use terrapress_catalog::{FragmentCatalog, FragmentKind, ProfileCatalog};
//!
//! let fragments = FragmentCatalog::builtin();
//! assert!(fragments.get(FragmentKind::Component, "provider").is_some());
//!
//! let profiles = ProfileCatalog::builtin();
//! assert!(profiles.get("cost-efficient").is_some());
//! ```

pub mod fragment;
pub mod profile;

mod components;
mod outputs;
mod variables;

pub use fragment::{Fragment, FragmentCatalog, FragmentKind};
pub use profile::{DeploymentProfile, ProfileCatalog, HIGH_AVAILABILITY};
