mod plan_record;
mod plans_service;
mod plans_service_impl;

pub use plans_service::*;
pub use plans_service_impl::*;
