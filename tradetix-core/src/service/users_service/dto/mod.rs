mod users_service_config;

pub use users_service_config::*;
