pub mod events_service;
pub mod listings_service;
pub mod tickets_service;
pub mod transactions_service;
pub mod users_service;
pub mod validation;
