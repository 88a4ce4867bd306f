//!
//! Pagination, filter and sort state kept in a URL query string.
//!
//! The URL is the only source of truth. [QueryStateSync] derives a
//! [PaginationRequest] from it on every read and writes every change
//! back through a [Navigator], replacing the current history entry.
//!

pub mod codec;
pub mod config;
pub mod dto;
pub mod error;
pub mod navigator;
pub mod reducer;

mod query_state_sync;

pub use config::QueryStateConfig;
pub use dto::*;
pub use error::Error;
pub use navigator::{MemoryNavigator, Navigator};
pub use query_state_sync::*;
