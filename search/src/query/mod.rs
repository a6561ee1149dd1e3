mod parser;
mod types;

pub use parser::{parse_query, QueryParser};
pub use types::ParsedQuery;
