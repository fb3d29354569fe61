pub mod config;
pub mod env;
pub mod error;
pub mod models;
pub mod presets;
pub mod sizing;
pub mod storage;

pub use config::SettingsManager;
pub use error::{AppError, AppResult};
pub use models::{Profile, SizingReport};
pub use storage::Repository;
