use dotenvy::dotenv;
use std::env;

/// Runtime configuration, read once at startup.
///
/// `amqp_url` selects the relay transport: set, the relay connects to
/// that AMQP server; unset, it falls back to the in-process broker.
/// `result_queue` is optional: when unset the relay runs in log-only mode
/// and never publishes outcomes.
pub struct Config {
    pub amqp_url: Option<String>,
    pub command_queue: String,
    pub result_queue: Option<String>,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let command_queue = match env::var("CATALOG_COMMAND_QUEUE") {
            Ok(val) => val,
            Err(_) => "product".to_string(),
        };

        let http_port = match env::var("CATALOG_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self {
            amqp_url: non_empty("CATALOG_AMQP_URL"),
            command_queue,
            result_queue: non_empty("CATALOG_RESULT_QUEUE"),
            http_port,
        }
    }
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            amqp_url: None,
            command_queue: "product".to_string(),
            result_queue: Some("products".to_string()),
            http_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_broker_url_selects_the_in_process_transport() {
        unsafe { env::set_var("CATALOG_AMQP_URL", "") };
        let config = Config::from_env();
        assert!(config.amqp_url.is_none());

        unsafe { env::set_var("CATALOG_AMQP_URL", "amqp://localhost:5672") };
        let config = Config::from_env();
        assert_eq!(config.amqp_url.as_deref(), Some("amqp://localhost:5672"));

        unsafe { env::remove_var("CATALOG_AMQP_URL") };
    }
}
