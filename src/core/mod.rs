// Core domain layer
pub mod models;
pub mod naming;
pub mod services;
pub mod interfaces;

pub use models::*;
pub use services::*;
pub use interfaces::*;
