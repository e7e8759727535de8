use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Locations of the live collection and the reset baseline.
/// Blank values are resolved by [`StorageConfig::normalize_from_env`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub users_file: String,
    #[serde(default)]
    pub reset_file: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RemoteConfig {
    #[serde(default)]
    pub users_url: String,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3000 }
fn default_users_file() -> String { "data/users.json".into() }
fn default_reset_file() -> String { "data/reset_users.json".into() }
fn default_users_url() -> String { "https://jsonplaceholder.typicode.com/users".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when present, otherwise defaults plus `SERVER_HOST`,
    /// `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(_) => Self::from_env(),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.remote.normalize_from_env();
        self.remote.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl StorageConfig {
    /// Blank paths are filled from `USERS_FILE` / `RESET_USERS_FILE`, then defaults.
    pub fn normalize_from_env(&mut self) {
        if self.users_file.trim().is_empty() {
            self.users_file = std::env::var("USERS_FILE").unwrap_or_else(|_| default_users_file());
        }
        if self.reset_file.trim().is_empty() {
            self.reset_file = std::env::var("RESET_USERS_FILE").unwrap_or_else(|_| default_reset_file());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.users_file.trim().is_empty() || self.reset_file.trim().is_empty() {
            return Err(anyhow!("storage.users_file and storage.reset_file must not be empty"));
        }
        if self.users_file == self.reset_file {
            return Err(anyhow!("storage.reset_file must differ from storage.users_file"));
        }
        Ok(())
    }
}

impl RemoteConfig {
    pub fn normalize_from_env(&mut self) {
        if self.users_url.trim().is_empty() {
            self.users_url = std::env::var("REMOTE_USERS_URL").unwrap_or_else(|_| default_users_url());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.users_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("remote.users_url must start with http:// or https://"));
        }
        Ok(())
    }
}
