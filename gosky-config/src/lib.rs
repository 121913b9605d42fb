// Configuration loading for the gosky backend

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::{EnvLoader, split_list};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};
