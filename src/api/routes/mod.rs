//! API route handlers

pub mod games;
pub mod system;
pub mod user;

pub use games::get_game;
pub use system::{health_check, openapi_spec, preflight};
pub use user::get_user;
