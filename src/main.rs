use std::{env, io::Write};

use tracing::{Instrument, info, span};
use tracing_subscriber::EnvFilter;
use weather_bot::{Config, WeatherQueryHandler, command};

/// Console host for the weather command. With arguments, the arguments form a
/// single command (`weather-bot 天气 北京`); otherwise commands are read from
/// stdin until the user inputs "exit".
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let handler = WeatherQueryHandler::new(config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        dispatch(&handler, command::normalize_input(&args.join(" "))).await;
        return Ok(());
    }

    span!(tracing::Level::INFO, "chat", role = "assistant").in_scope(|| {
        info!("Send `weather <city>` (or `天气` / `wq`) to query the weather");
        info!("Send `exit` to stop");
    });

    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        // EOF
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let user_request = command::normalize_input(&buffer);
        if user_request.trim() == "exit" {
            break;
        }
        if user_request.trim().is_empty() {
            continue;
        }

        dispatch(&handler, user_request)
            .instrument(span!(tracing::Level::INFO, "command"))
            .await;
    }

    Ok(())
}

/// Routes one message to the weather handler and prints its replies in order.
async fn dispatch(handler: &WeatherQueryHandler, message: &str) {
    if !command::is_weather_command(message) {
        println!("未知命令，请使用: weather <城市>");
        return;
    }

    for reply in handler.handle(message).await {
        println!("{}", reply);
    }
}
