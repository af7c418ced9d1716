mod app;
mod config;
mod driver;
mod http;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use driver::DriverError;
pub use http::{HttpError, SendError};
pub use validation::ValidationError;
