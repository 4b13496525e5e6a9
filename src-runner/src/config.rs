pub struct Config {
    pub db_path: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let db_path = std::env::var("DM_DB_PATH")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| anyhow::anyhow!("DM_DB_PATH (or DATABASE_URL) must be set"))?;
        let log_format = std::env::var("DM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Ok(Self {
            db_path,
            log_format,
        })
    }
}
