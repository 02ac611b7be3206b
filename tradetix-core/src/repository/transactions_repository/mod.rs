mod dto;
mod entity;
mod transactions_repository;
mod transactions_repository_impl;

pub use dto::Transaction;
pub use transactions_repository::*;
pub use transactions_repository_impl::*;
