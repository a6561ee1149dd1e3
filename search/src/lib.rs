//! Listing search core.
//!
//! Turns the text typed in a search box plus a set of optional structured
//! filters into a single [`Predicate`] that can be evaluated in memory
//! against any [`SearchRecord`] or rendered into a SQL `WHERE` fragment.
//!
//! ```
//! use listing_search::{compile, parse_query, FilterCriteria, Property};
//!
//! let criteria = FilterCriteria {
//!     city: Some("Paris".to_string()),
//!     price_min: Some(200_000.0),
//!     ..Default::default()
//! };
//! let predicate = compile(&criteria, &parse_query("\"vue mer\" -rénover"));
//!
//! let property = Property {
//!     city: Some("Paris".to_string()),
//!     price: Some(300_000.0),
//!     title: Some("Bel appartement vue mer".to_string()),
//!     ..Default::default()
//! };
//! assert!(predicate.matches(&property));
//! ```

mod config;
mod criteria;
mod predicate;
mod query;
mod record;
pub mod validation;

pub use config::{SearchConfig, StopWordPolicy, TermMatchPolicy};
pub use criteria::{FilterCriteria, UserFilterCriteria};
pub use predicate::{
    build_sql, build_sql_with_offset, compile, compile_users, Field, Predicate, PredicateCompiler,
    SqlValue, Value,
};
pub use query::{parse_query, ParsedQuery, QueryParser};
pub use record::{Property, SearchRecord, User};
