use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;
use url::Url;

/// Service configuration, read once from the environment with the
/// `MAMACARE_` prefix (a `.env` file is honored via dotenvy in `main`).
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Africa's Talking account username. SMS dispatch is disabled when
    /// either credential is absent.
    #[serde(default)]
    pub at_username: Option<String>,
    #[serde(default)]
    pub at_api_key: Option<String>,
    #[serde(default = "default_sms_endpoint")]
    pub sms_endpoint: Url,
    /// Sender id shown on outbound SMS, e.g. a short code.
    #[serde(default)]
    pub sms_from: Option<String>,
}

fn default_database_url() -> String {
    "sqlite:maternal_care.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_sms_endpoint() -> Url {
    Url::parse("https://api.africastalking.com/version1/messaging")
        .expect("FATAL: default SMS endpoint URL is invalid")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            loglevel: default_loglevel(),
            listen_addr: default_listen_addr(),
            at_username: None,
            at_api_key: None,
            sms_endpoint: default_sms_endpoint(),
            sms_from: None,
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::prefixed("MAMACARE_"))
        .extract()
        .expect("FATAL: invalid MAMACARE_* environment configuration")
});
