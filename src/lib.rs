pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;
pub mod state;

pub use app::app;
pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
