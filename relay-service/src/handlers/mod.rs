//! HTTP handlers for the relay service.

pub mod chat;
pub mod health;
pub mod image;

pub use chat::chat;
pub use health::{health_check, metrics, readiness_check};
pub use image::image;
