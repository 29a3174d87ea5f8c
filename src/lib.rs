//! Chat-bot weather command: `weather <city>` (aliases `天气`, `wq`) queries a
//! weather API and answers with an optional icon image followed by a text report.

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod reply;
pub mod weather;

pub use config::{Config, LivingPolicy};
pub use error::AppError;
pub use handler::WeatherQueryHandler;
pub use reply::Reply;
