//! # terrapress_render
//!
//! Substitution engine and document assembly for terrapress.
//!
//! Two genuinely different generation strategies live here:
//!
//! - `main.tf` and `variables.tf` are assembled by the generic fragment
//!   pipeline: profile order drives catalog lookups, each hit is run
//!   through placeholder substitution and appended, each miss becomes a
//!   recorded warning and is skipped.
//! - `terraform.tfvars` is emitted field by field against a fixed
//!   schema, with an extra block for the high-availability profile.
//!
//! Warnings are returned as structured records next to the documents so
//! callers can assert on them without scraping console output.
//!
//! ## Example
//!
//! ```rust
//! use terrapress_config::ConfigSet;
//! use terrapress_render::DocumentAssembler;
//!
//! let mut config = ConfigSet::defaults();
//! config.apply_derivations();
//!
//! let assembler = DocumentAssembler::new();
//! let deployment = assembler.assemble("cost-efficient", &config).unwrap();
//! assert!(deployment.documents.get("main.tf").is_some());
//! ```

pub mod assembler;
pub mod error;
pub mod substitute;
pub mod warning;

mod tfvars;

pub use assembler::{AssembledDeployment, DocumentAssembler, DocumentSet, MAIN_TF, TFVARS, VARIABLES_TF};
pub use error::{RenderError, RenderResult};
pub use substitute::Substitutor;
pub use warning::RenderWarning;
