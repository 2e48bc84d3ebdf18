pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod render;
pub mod summary;

pub use config::Config;
pub use error::{AppError, Result};
