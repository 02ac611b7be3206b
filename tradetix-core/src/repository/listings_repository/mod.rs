mod dto;
mod entity;
mod listings_repository;
mod listings_repository_impl;

pub use dto::Listing;
pub use listings_repository::*;
pub use listings_repository_impl::*;
