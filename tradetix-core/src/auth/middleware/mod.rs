mod session_layer;
mod session_service;

pub use session_layer::SessionLayer;
