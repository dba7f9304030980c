use std::{env, time::Duration};

/// Delay applied by the health check and by `/sleep/{ms}/` when the path
/// segment does not parse.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8071;

#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub host: String,
    pub port: u16,
}

impl GlobalConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT").map_or(DEFAULT_PORT, |p| {
                p.parse().expect("`PORT` must be a valid port number")
            }),
        }
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
