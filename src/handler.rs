use tracing::{error, info, instrument};

use crate::command::{CityQuery, USAGE_HINT};
use crate::config::Config;
use crate::error::AppError;
use crate::format::render_report;
use crate::reply::Reply;
use crate::weather;

/// Answers one weather command with an ordered list of replies.
///
/// Holds no per-invocation state, so a single handler can serve any number
/// of concurrent commands.
pub struct WeatherQueryHandler {
    client: reqwest::Client,
    config: Config,
}

impl WeatherQueryHandler {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Handles the raw command text (e.g. `"天气 北京"`).
    ///
    /// The result is either a single usage hint, a single error message, or
    /// an optional image reply followed by exactly one text reply.
    #[instrument(skip(self))]
    pub async fn handle(&self, message: &str) -> Vec<Reply> {
        let query = CityQuery::parse(message);
        let Some(city) = query.resolve(&self.config.default_city) else {
            info!("Empty city argument, sending usage hint");
            return vec![Reply::plain(USAGE_HINT)];
        };

        match weather::get_weather(&self.client, &self.config.endpoint, city).await {
            Ok(data) => {
                let mut replies = Vec::with_capacity(2);
                if let Some(url) = data.current.image() {
                    replies.push(Reply::image(url));
                }
                replies.push(Reply::plain(render_report(
                    &data,
                    self.config.living_policy,
                )));
                replies
            }
            Err(e) => {
                error!("Weather query for {} failed: {}", city, e);
                vec![Reply::plain(e.user_message())]
            }
        }
    }
}
