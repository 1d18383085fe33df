//! Squill assembles positional prepared statements into plain SQL text.
//!
//! A [`Template`] holds the statement split around its `?` placeholders, a
//! [`PreparedStatement`] collects one value per placeholder and renders each
//! one as a dialect literal: strings quoted and escaped, dates in fixed
//! patterns, arrays and tuples recursively.
//!
//! ```rust
//! use squill::{Prepared, PreparedStatement};
//!
//! let mut statement = PreparedStatement::parse("INSERT INTO t VALUES (?, ?)");
//! statement.bind(1)?.bind("it's")?;
//! assert_eq!(statement.sql()?, r"INSERT INTO t VALUES (1, 'it\'s')");
//! # Ok::<(), squill::Error>(())
//! ```
pub use squill_core::*;
