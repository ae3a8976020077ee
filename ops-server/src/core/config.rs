use std::path::PathBuf;

use crate::notify::PhoneConfig;

/// Server configuration, loaded from the environment
///
/// Every setting can be overridden with an environment variable:
///
/// | variable | default | purpose |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development \| staging \| production |
/// | WORK_DIR | ./data | database and log root |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | PUBLIC_URL | http://localhost:3000 | base for finalize links in courier texts |
/// | STORE_NAME | Pizzaria Forno | banners, customer texts, PIX merchant name |
/// | TIMEZONE | America/Sao_Paulo | business-day boundaries for reports |
/// | WHATSAPP_API_URL | unset | notification gateway; unset disables texts |
/// | WHATSAPP_API_TOKEN | unset | bearer token for the gateway |
/// | PHONE_COUNTRY_CODE | 55 | prefix for phone normalization |
/// | PHONE_STRIP_NINTH_DIGIT | true | drop the redundant mobile 9 |
/// | PIX_KEY | unset | PIX charges; unset disables the endpoint |
/// | PIX_MERCHANT_CITY | SAO PAULO | BR Code merchant city |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/forno HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Working directory for database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Externally reachable base URL, used in courier finalize links
    pub public_url: String,
    /// Store display name
    pub store_name: String,
    /// IANA timezone for business-day boundaries
    pub timezone: String,
    /// WhatsApp gateway endpoint; None disables outbound texts
    pub whatsapp_api_url: Option<String>,
    /// Bearer token for the WhatsApp gateway
    pub whatsapp_api_token: Option<String>,
    /// Country code prefixed during phone normalization
    pub phone_country_code: String,
    /// Strip the leading mobile 9 after the area code
    pub phone_strip_ninth_digit: bool,
    /// PIX key for charge payloads; None disables the PIX endpoint
    pub pix_key: Option<String>,
    /// Merchant city embedded in PIX payloads
    pub pix_merchant_city: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "Pizzaria Forno".into()),
            timezone: std::env::var("TIMEZONE").unwrap_or_else(|_| "America/Sao_Paulo".into()),
            whatsapp_api_url: std::env::var("WHATSAPP_API_URL").ok(),
            whatsapp_api_token: std::env::var("WHATSAPP_API_TOKEN").ok(),
            phone_country_code: std::env::var("PHONE_COUNTRY_CODE")
                .unwrap_or_else(|_| "55".into()),
            phone_strip_ninth_digit: std::env::var("PHONE_STRIP_NINTH_DIGIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            pix_key: std::env::var("PIX_KEY").ok(),
            pix_merchant_city: std::env::var("PIX_MERCHANT_CITY")
                .unwrap_or_else(|_| "SAO PAULO".into()),
        }
    }

    /// Override the fields tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("db")
    }

    /// Directory holding rolling log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory tree if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// Phone normalization settings for the notifier
    pub fn phone_config(&self) -> PhoneConfig {
        PhoneConfig {
            country_code: self.phone_country_code.clone(),
            strip_ninth_digit: self.phone_strip_ninth_digit,
        }
    }

    /// Business timezone, falling back to São Paulo on a bad value
    pub fn tz(&self) -> chrono_tz::Tz {
        self.timezone
            .parse()
            .unwrap_or(chrono_tz::America::Sao_Paulo)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
