//! Builds structured queries for AWS CloudSearch.
//!
//! Expressions are created with the factory functions and rendered with
//! [`Expression::build`]. Importing the factories directly keeps call sites short:
//!
//! ```
//! use cloudsearch_query::{and, range, term};
//!
//! let query = and([term("title", "star wars")?, range("year", 1977, 1980)?])?.build()?;
//! assert_eq!(
//!     query,
//!     "( and ( term field= title 'star wars' ) ( range field= year { 1977 , 1980 } ) )"
//! );
//! # Ok::<(), cloudsearch_query::QueryError>(())
//! ```
//!
//! Text values are wrapped in single quotes as-is. Quotes inside a value are
//! not escaped; callers passing untrusted text must escape it themselves.

mod builder;
mod errors;
mod expression;
mod serializer;
mod value;

pub use builder::{
    and, eq, matchall, not, or, phrase, prefix, range, range_bounds, range_from, range_to, term,
};
pub use errors::QueryError;
pub use expression::{Expression, ExpressionKind, Operator};
pub use value::{format_timestamp, Value, TIMESTAMP_FORMAT};
