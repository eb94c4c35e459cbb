use crate::dotenv;
use crate::error::Error;
use std::env::VarError;
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

fn optional_var(key: &str) -> Result<Option<String>, Error> {
    match dotenv::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(dotenv::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    match value {
        Some(v) => Ok(v.trim().parse()?),
        None => Ok(default),
    }
}

impl Config {
    /// Reads the settings from the process environment (and `.env`, once loaded).
    pub fn from_env() -> Result<Self, Error> {
        let database_url = optional_var("DATABASE_URL")?.ok_or_else(|| Error::ConfigError("environment variable DATABASE_URL not been set".into()))?;
        Ok(Self {
            database_url,
            host: optional_var("SERVER_HOST")?.unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or(optional_var("SERVER_PORT")?, DEFAULT_PORT)?,
            max_connections: parse_or(optional_var("DATABASE_MAX_CONNECTIONS")?, DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}
