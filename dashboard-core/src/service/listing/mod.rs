//!
//! Applies [query_state::PaginationRequest] to in-memory records.
//!

mod criteria;
mod field_value;
mod listing;
mod record;

pub use field_value::*;
pub use listing::*;
pub use record::*;
