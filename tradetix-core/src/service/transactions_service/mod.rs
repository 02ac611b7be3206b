mod transactions_service;
mod transactions_service_impl;

pub use transactions_service::*;
pub use transactions_service_impl::*;
