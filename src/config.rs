use std::{env, time::Duration};

use crate::error::AppError;

// Free endpoint, no authentication
const DEFAULT_ENDPOINT: &str = "https://api.suyanw.cn/api/weather.php";
const DEFAULT_CITY: &str = "广州";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How entries of the living-index sequence are picked for the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivingPolicy {
    /// Render every entry whose name is in the fixed allow-list
    AllowList,
    /// Render the first `n` entries unfiltered
    FirstN(usize),
}

/// Runtime configuration for the weather query handler
#[derive(Debug, Clone)]
pub struct Config {
    /// Weather API endpoint, queried as `<endpoint>?city=<city>`
    pub endpoint: String,
    /// City used when the command carries no argument
    pub default_city: String,
    /// Upper bound on the single outbound request
    pub timeout: Duration,
    pub living_policy: LivingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            living_policy: LivingPolicy::AllowList,
        }
    }
}

impl Config {
    /// Builds the configuration from defaults overlaid with environment variables.
    ///
    /// * `WEATHER_API_ENDPOINT` - endpoint URL
    /// * `WEATHER_DEFAULT_CITY` - default city
    /// * `WEATHER_TIMEOUT_SECS` - request timeout in seconds
    /// * `WEATHER_LIVING_LIMIT` - when set, render the first N living indexes instead of the allow-list
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(endpoint) = get("WEATHER_API_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(city) = get("WEATHER_DEFAULT_CITY") {
            let city = city.trim();
            if !city.is_empty() {
                config.default_city = city.to_string();
            }
        }
        if let Some(secs) = get("WEATHER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::InvalidConfig(format!("WEATHER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(limit) = get("WEATHER_LIVING_LIMIT") {
            let limit: usize = limit.trim().parse().map_err(|_| {
                AppError::InvalidConfig(format!("WEATHER_LIVING_LIMIT is not a number: {}", limit))
            })?;
            config.living_policy = LivingPolicy::FirstN(limit);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_living_policy(mut self, policy: LivingPolicy) -> Self {
        self.living_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_city, "广州");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.living_policy, LivingPolicy::AllowList);
        assert!(config.endpoint.starts_with("https://"));
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_endpoint("http://localhost:1234/weather")
            .with_timeout(Duration::from_millis(250))
            .with_living_policy(LivingPolicy::FirstN(10));
        assert_eq!(config.endpoint, "http://localhost:1234/weather");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.living_policy, LivingPolicy::FirstN(10));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = lookup(&[
            ("WEATHER_API_ENDPOINT", "http://localhost:8080/weather"),
            ("WEATHER_DEFAULT_CITY", " 北京 "),
            ("WEATHER_TIMEOUT_SECS", "3"),
            ("WEATHER_LIVING_LIMIT", "10"),
        ])
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/weather");
        assert_eq!(config.default_city, "北京");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.living_policy, LivingPolicy::FirstN(10));
    }

    #[test]
    fn no_variables_keeps_defaults() {
        let config = lookup(&[]).unwrap();
        assert_eq!(config.default_city, "广州");
        assert_eq!(config.living_policy, LivingPolicy::AllowList);
    }

    #[test]
    fn blank_default_city_is_ignored() {
        let config = lookup(&[("WEATHER_DEFAULT_CITY", "   ")]).unwrap();
        assert_eq!(config.default_city, "广州");
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let err = lookup(&[("WEATHER_TIMEOUT_SECS", "ten")]).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(ref msg) if msg.contains("WEATHER_TIMEOUT_SECS")));
    }

    #[test]
    fn non_numeric_living_limit_is_rejected() {
        let err = lookup(&[("WEATHER_LIVING_LIMIT", "all")]).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(ref msg) if msg.contains("WEATHER_LIVING_LIMIT")));
    }
}
