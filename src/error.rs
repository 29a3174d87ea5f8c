use thiserror::Error;

/// Error types for the weather bot
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream answered with something other than `200 OK`
    #[error("API request failed with status {0}")]
    HttpStatus(u16),

    /// Upstream answered `200 OK` but the envelope `code` is not `1`
    #[error("Weather API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Error when the response body does not have the expected shape
    #[error("Failed to parse API response: {0}")]
    ResponseParseError(String),

    /// Error when a configuration value cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Wrapper for reqwest errors (connection failures, timeouts)
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    /// The single message shown to the user for this failure.
    ///
    /// Raw transport and parser errors are never included; they are logged
    /// by the caller instead.
    pub fn user_message(&self) -> String {
        match self {
            AppError::RequestError(e) if e.is_timeout() => {
                "天气查询超时，请稍后再试".to_string()
            }
            AppError::RequestError(_) => "网络请求失败，请稍后再试".to_string(),
            AppError::HttpStatus(status) => format!("API 请求失败，状态码: {}", status),
            AppError::Api { code, message } => {
                format!("天气 API 错误: {} (code: {})", message, code)
            }
            AppError::ResponseParseError(_) | AppError::JsonError(_) => {
                "查询出错: 天气数据格式异常，请稍后再试".to_string()
            }
            AppError::InvalidConfig(_) => "查询出错: 插件配置无效".to_string(),
        }
    }
}

/// Fixed message table for the weather API's business error codes.
pub fn api_error_message(code: i64) -> Option<&'static str> {
    match code {
        400 => Some("请求参数错误！"),
        403 => Some("请求被服务器拒绝！"),
        405 => Some("客户端请求中的方法被禁止！"),
        408 => Some("请求时间过长！"),
        500 => Some("服务端内部错误！"),
        501 => Some("服务端不支持请求的功能，无法完成请求！"),
        503 => Some("系统维护中！"),
        _ => None,
    }
}

/// Resolves an API error: table entry first, then the body's own `text`
/// (verbatim, even when empty), then a generic fallback.
pub fn resolve_api_error(code: i64, text: Option<&str>) -> AppError {
    let message = api_error_message(code)
        .or(text)
        .unwrap_or("未知错误")
        .to_string();
    AppError::Api { code, message }
}
