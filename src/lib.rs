pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod router;
pub mod service;
pub mod types;

pub use error::CareError;
pub use menu::{Resolved, resolve};
pub use service::notifier::Notifier;
