use std::fmt;

/// A single reply event handed back to the host, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message
    Plain(String),
    /// Image message, referenced by URL
    Image(String),
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Reply::Plain(text.into())
    }

    pub fn image(url: impl Into<String>) -> Self {
        Reply::Image(url.into())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Plain(text) => write!(f, "{}", text),
            Reply::Image(url) => write!(f, "[图片] {}", url),
        }
    }
}
