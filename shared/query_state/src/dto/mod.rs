mod filter_value;
mod order_rule;
mod pagination_patch;
mod pagination_request;
mod ranged_filter;

pub use filter_value::*;
pub use order_rule::*;
pub use pagination_patch::*;
pub use pagination_request::*;
pub use ranged_filter::*;
