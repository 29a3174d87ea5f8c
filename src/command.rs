/// Primary command keyword
pub const COMMAND: &str = "weather";

/// Alternative keywords routed to the same handler
pub const ALIASES: &[&str] = &["天气", "wq"];

pub const USAGE_HINT: &str = "请提供城市名称，例如: weather 北京 或 天气 上海";

/// Returns true when the first token of `message` is the weather keyword or one of its aliases.
/// A leading `/` on the keyword is accepted.
pub fn is_weather_command(message: &str) -> bool {
    message
        .split_whitespace()
        .next()
        .map(|keyword| keyword.trim_start_matches('/'))
        .is_some_and(|keyword| keyword == COMMAND || ALIASES.contains(&keyword))
}

/// Strips the line terminator, a pasted `>` prompt and a leading `/` from one
/// line of console input. Trailing whitespace is kept: it is what separates a
/// whitespace-only argument from no argument at all.
pub fn normalize_input(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
        .trim_start_matches('>')
        .trim_start()
        .trim_start_matches('/')
}

/// The city part of a weather command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityQuery {
    /// No argument at all: use the configured default city
    Default,
    /// An explicit, trimmed city name
    City(String),
    /// The keyword was followed by whitespace only
    Empty,
}

impl CityQuery {
    /// Splits `message` on the first whitespace run and takes the remainder as the city.
    pub fn parse(message: &str) -> Self {
        let message = message.trim_start();
        match message.split_once(char::is_whitespace) {
            None => CityQuery::Default,
            Some((_, rest)) => {
                let city = rest.trim();
                if city.is_empty() {
                    CityQuery::Empty
                } else {
                    CityQuery::City(city.to_string())
                }
            }
        }
    }

    /// Effective city to query, or `None` when the usage hint must be sent instead.
    pub fn resolve<'a>(&'a self, default_city: &'a str) -> Option<&'a str> {
        match self {
            CityQuery::Default => Some(default_city),
            CityQuery::City(city) => Some(city.as_str()),
            CityQuery::Empty => None,
        }
    }
}
