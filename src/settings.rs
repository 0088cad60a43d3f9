use crate::common::env::FromEnv;
use chrono::TimeDelta;
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

pub struct AppSettings {
    pub app_component: String,
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: usize,
    pub db_wait_timeout: Duration,

    pub request_timeout: Duration,

    pub jwt_secret: String,
    pub token_expiry: TimeDelta,
    pub password_hash_cost: u32,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let app_component = env::var("APP_COMPONENT")?;
        let level = Level::from_env("LOG_LEVEL")?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let database_url = env::var("DATABASE_URL")?;
        let db_max_connections = usize::from_env("DB_MAX_CONNECTIONS")?;
        let db_wait_timeout_secs = u64::from_env("DB_WAIT_TIMEOUT_SECS")?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        let request_timeout_secs = u64::from_env("REQUEST_TIMEOUT_SECS")?;
        let request_timeout = Duration::from_secs(request_timeout_secs);

        let jwt_secret = env::var("JWT_SECRET")?;
        let token_expiry_secs = i64::from_env("TOKEN_EXPIRY_SECS")?;
        let token_expiry = TimeDelta::seconds(token_expiry_secs);
        let password_hash_cost = u32::from_env("PASSWORD_HASH_COST")?;

        Ok(AppSettings {
            app_component,
            level,
            app_host,
            app_port,

            database_url,
            db_max_connections,
            db_wait_timeout,

            request_timeout,

            jwt_secret,
            token_expiry,
            password_hash_cost,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
