mod listings_service;
mod listings_service_impl;

pub use listings_service::*;
pub use listings_service_impl::*;
