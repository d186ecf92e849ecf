//! Annofuse Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the annofuse project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all annofuse
//! workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing setup
//! - **Tabular Parsing**: Gene-list extraction from delimited uploads
//! - **Types**: Shared domain types and data structures
//!
//! # Example
//!
//! ```no_run
//! use annofuse_common::{Result, tabular};
//!
//! fn load_genes(bytes: &[u8]) -> Result<()> {
//!     let genes = tabular::parse_gene_list(bytes)?;
//!     println!("Parsed {} gene identifiers", genes.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod tabular;
pub mod types;

// Re-export commonly used types
pub use error::{AnnofuseError, Result};
