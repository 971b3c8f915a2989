use gameverse_igdb::Credentials;

/// Server configuration loaded from environment variables.
///
/// All fields except the provider credentials have defaults suitable for
/// local development. Credentials are optional by design: without them the
/// catalog endpoints answer 503 while the trivia endpoints keep working.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Game-provider credentials, present only when both halves are set.
    pub credentials: Option<Credentials>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `TWITCH_CLIENT_ID`     | unset                      |
    /// | `TWITCH_CLIENT_SECRET` | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let credentials = Credentials::from_parts(
            std::env::var("TWITCH_CLIENT_ID").ok(),
            std::env::var("TWITCH_CLIENT_SECRET").ok(),
        );

        if credentials.is_none() {
            tracing::warn!(
                "TWITCH_CLIENT_ID / TWITCH_CLIENT_SECRET not configured, catalog runs degraded"
            );
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            credentials,
        }
    }
}
