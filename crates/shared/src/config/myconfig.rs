use anyhow::{Context, Result, anyhow};

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub port: u16,
    /// Absolute origin browsers reach this front end on. Google posts credentials back here.
    pub public_url: String,
    pub google_client_id: Option<String>,
    pub cookie_secure: bool,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `init` feeds it the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = absolute_url("API_BASE", lookup("API_BASE"), DEFAULT_API_BASE.to_string())?;

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let public_url = absolute_url(
            "PUBLIC_URL",
            lookup("PUBLIC_URL"),
            format!("http://localhost:{port}"),
        )?;

        let google_client_id = lookup("GOOGLE_CLIENT_ID").filter(|v| !v.trim().is_empty());

        let cookie_secure = match lookup("COOKIE_SECURE").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "COOKIE_SECURE must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            api_base,
            port,
            public_url,
            google_client_id,
            cookie_secure,
            dev_mode,
            enable_file_log,
        })
    }
}

/// Trimmed, without trailing slash, and required to be an absolute http(s) URL.
fn absolute_url(key: &str, value: Option<String>, default: String) -> Result<String> {
    let url = value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default);

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(anyhow!("{key} must be an absolute http(s) URL, got '{url}'"));
    }

    Ok(url)
}
