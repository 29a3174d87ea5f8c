use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::error::{AppError, resolve_api_error};

mod response;

pub use response::{CurrentConditions, Envelope, LivingIndex, WeatherData};

/// Fetches current conditions and living indexes for `city`.
///
/// # Arguments
/// * `client` - HTTP client, already configured with the request timeout
/// * `endpoint` - Weather API endpoint, queried as `<endpoint>?city=<city>`
/// * `city` - City name, sent query-encoded
///
/// # Returns
/// * `WeatherData` when the API answers `200 OK` with `code == 1`
/// * `AppError::HttpStatus` for any other HTTP status (the body is not parsed)
/// * `AppError::Api` when the envelope carries a business error code
/// * `AppError::JsonError` when the body is not JSON or `data` does not have the expected shape
/// * `AppError::ResponseParseError` when a success carries no `data`
pub async fn get_weather(
    client: &reqwest::Client,
    endpoint: &str,
    city: &str,
) -> Result<WeatherData, AppError> {
    info!("Fetching weather data for city: {}", city);

    let response = client.get(endpoint).query(&[("city", city)]).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        error!("Failed to fetch weather data: {}", status);
        return Err(AppError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    let envelope: Envelope = serde_json::from_str(&body)?;

    let code = envelope.code.unwrap_or(0);
    if code != 1 {
        let err = resolve_api_error(code, envelope.text.as_deref());
        error!("Weather API returned an error: {}", err);
        return Err(err);
    }

    let data = envelope.data.ok_or_else(|| {
        AppError::ResponseParseError("missing `data` in successful response".to_string())
    })?;
    let weather: WeatherData = serde_json::from_value(data)?;

    debug!("Weather data fetched successfully: {:?}", weather);
    Ok(weather)
}
