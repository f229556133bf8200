use std::env;

/// Persistence backend picked once at process start; every backend satisfies
/// the same repository contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    SeaOrm,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "postgres" => Ok(StorageBackend::Postgres),
            "sea-orm" | "seaorm" => Ok(StorageBackend::SeaOrm),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow::anyhow!("unknown STORAGE_BACKEND: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub orders_page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value)?,
            Err(_) => StorageBackend::Postgres,
        };
        let database_url = env::var("DATABASE_URL").ok();
        if database_url.is_none() && storage_backend != StorageBackend::Memory {
            anyhow::bail!("DATABASE_URL must be set unless STORAGE_BACKEND=memory");
        }
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let orders_page_size = env::var("ORDERS_PAGE_SIZE")
            .ok()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(20)
            .clamp(1, 100);
        Ok(Self {
            database_url,
            host,
            port,
            storage_backend,
            orders_page_size,
        })
    }
}
