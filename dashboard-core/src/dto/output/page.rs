use crate::service::listing::Listing;
use query_state::PaginationRequest;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records matching filters, before paging
    pub total: usize,
    pub page: u32,
    pub rows: u32,
}

impl<T> Page<T> {
    pub fn new<E>(listing: Listing<E>, request: &PaginationRequest) -> Self
    where
        T: From<E>,
    {
        Self {
            items: listing.items.into_iter().map(T::from).collect(),
            total: listing.total,
            page: request.page,
            rows: request.rows,
        }
    }
}
