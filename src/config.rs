use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "data/students.csv";
pub const DEFAULT_PORT: &str = "8000";

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "student_roster=debug,tower_http=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub csv_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let raw_port = env::var("APP_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = parse_port(&raw_port)?;

        let csv_path = env::var("STUDENTS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH));

        Ok(Self {
            host,
            port,
            csv_path,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("APP_PORT must be a valid u16, got '{raw}'"))
}
