//! Tiered compliance linting for Markdown instruction documents.
//!
//! Documents are classified into a [`Tier`] by path, parsed into a lossless
//! syntax tree, and checked by the rules that apply to their tier.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let config = stricture::Config::default();
//! let linter = stricture::Linter::new(&config, "/repo").unwrap();
//! let input = "# Scope\n\nValidate all inputs.\n";
//! let tree = stricture::parse(input);
//! for diagnostic in linter.lint(&tree, input, Path::new("commands/deploy.md")) {
//!     println!("{}: {}", diagnostic.code, diagnostic.message);
//! }
//! ```

pub mod config;
pub mod error;
pub mod linter;
pub mod parser;
pub mod syntax;
pub mod tier;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use linter::{Diagnostic, Linter, Severity};
pub use parser::parse;
pub use syntax::SyntaxNode;
pub use tier::{Tier, TierClassifier};
