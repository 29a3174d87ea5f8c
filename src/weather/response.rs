use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level envelope returned by the weather API.
/// `data` is only present (and only read) when `code` is `1`.
#[derive(serde::Deserialize, Debug)]
pub struct Envelope {
    /// Status code; `1` is success. Sent either as a number or a numeric string.
    #[serde(default, deserialize_with = "code_lenient")]
    pub code: Option<i64>,
    /// Reason text accompanying an error code. Only scalar values are kept.
    #[serde(default, deserialize_with = "scalar_text")]
    pub text: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Payload of a successful response
#[derive(serde::Deserialize, Debug, Clone)]
pub struct WeatherData {
    pub current: CurrentConditions,
    #[serde(default)]
    pub living: Vec<LivingIndex>,
    #[serde(default)]
    pub warning: Option<Value>,
}

impl WeatherData {
    /// The warning payload, if it carries anything worth rendering.
    pub fn warning(&self) -> Option<&Value> {
        self.warning.as_ref().filter(|w| match w {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
            _ => true,
        })
    }
}

/// Current weather conditions for the queried city
#[derive(serde::Deserialize, Debug, Clone)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "text")]
    pub city: String,
    /// Last-update time as reported by the API
    #[serde(deserialize_with = "text")]
    pub time: String,
    #[serde(deserialize_with = "text")]
    pub weather: String,
    #[serde(rename = "weatherEnglish", deserialize_with = "text")]
    pub weather_english: String,
    /// Temperature in Celsius
    #[serde(deserialize_with = "text")]
    pub temp: String,
    /// Felt temperature in Fahrenheit
    #[serde(deserialize_with = "text")]
    pub fahrenheit: String,
    #[serde(deserialize_with = "text")]
    pub humidity: String,
    /// Wind direction
    #[serde(deserialize_with = "text")]
    pub wind: String,
    #[serde(rename = "windSpeed", deserialize_with = "text")]
    pub wind_speed: String,
    #[serde(deserialize_with = "text")]
    pub visibility: String,
    #[serde(deserialize_with = "text")]
    pub air_pm25: String,
    /// Air quality index
    #[serde(deserialize_with = "text")]
    pub air: String,
    /// Weather icon URL
    #[serde(default)]
    pub image: Option<String>,
}

impl CurrentConditions {
    /// Icon URL, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// One living-index advisory entry
#[derive(serde::Deserialize, Debug, Clone)]
pub struct LivingIndex {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub index: String,
    #[serde(default, deserialize_with = "text")]
    pub tips: String,
}

// The API is inconsistent about quoting numbers, so scalar fields are read as text.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar, found {}",
            other
        ))),
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn code_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
