//!
//! JWT handling shared by the marketplace services:
//! issuing tokens, validating them in a tower middleware
//! and checking roles of the authenticated user.
//!

pub mod error;
pub mod test;
pub mod util;

mod dto;
mod encoder;
mod functions;
mod middleware;

pub use dto::{Claims, User};
pub use encoder::JwtEncoder;
pub use functions::*;
pub use middleware::JwtAuthLayer;
