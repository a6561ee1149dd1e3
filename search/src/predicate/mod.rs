mod builder;
mod compiler;
mod eval;
mod types;

pub use builder::{build_sql, build_sql_with_offset, SqlValue};
pub use compiler::{compile, compile_users, PredicateCompiler};
pub use types::{Field, Predicate, Value};
