use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_ADMIN_USER: &str = "qoratoshtraveladmin";
const DEFAULT_ADMIN_PASS: &str = "admin123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Where tours are read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToursBackend {
    /// Proxy to the public site's `/api/admin/tours`
    Remote,
    /// Local SQLite table, reduced legacy shape
    Local,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin_user: String,
    pub admin_pass: String,
    pub site_api_base: String,
    pub site_admin_user: String,
    pub site_admin_pass: String,
    pub tours_backend: ToursBackend,
    pub database_url: String,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub telegram_api_base: String,
    pub http_timeout: Duration,
    pub port: u16,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_user = var_or("ADMIN_USER", DEFAULT_ADMIN_USER);
        let admin_pass = var_or("ADMIN_PASS", DEFAULT_ADMIN_PASS);
        let site_admin_user = env::var("SITE_ADMIN_USER").unwrap_or_else(|_| admin_user.clone());
        let site_admin_pass = env::var("SITE_ADMIN_PASS").unwrap_or_else(|_| admin_pass.clone());

        let tours_backend = match var_or("TOURS_BACKEND", "remote").as_str() {
            "remote" => ToursBackend::Remote,
            "local" => ToursBackend::Local,
            other => {
                return Err(ConfigError::Invalid {
                    key: "TOURS_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let data_dir = PathBuf::from(var_or("DATA_DIR", "data"));
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            format!("sqlite://{}", data_dir.join("qoratosh.sqlite").display())
        });

        Ok(Self {
            admin_user,
            admin_pass,
            site_api_base: trim_base(&var_or("SITE_API_BASE", "http://localhost:3000")),
            site_admin_user,
            site_admin_pass,
            tours_backend,
            database_url,
            upload_dir: PathBuf::from(var_or("UPLOAD_DIR", "uploads")),
            data_dir,
            telegram_api_base: trim_base(&var_or("TELEGRAM_API_BASE", "https://api.telegram.org")),
            http_timeout: Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", 30)?),
            port: parse_var("PORT", 4000)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn telegram_config_path(&self) -> PathBuf {
        self.data_dir.join("telegram.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("admin-settings.json")
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_bases() {
        assert_eq!(trim_base("http://site.test/"), "http://site.test");
        assert_eq!(trim_base("http://site.test"), "http://site.test");
    }
}
