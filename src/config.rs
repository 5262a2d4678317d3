//! Application configuration — loaded from environment variables.

use std::error::Error as StdError;
use std::fmt;

/// Public configuration for the hosted product database. Both values are
/// safe to expose to client-side code; the key is the anonymous-role key.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the hosted database project.
    pub supabase_url: String,
    /// Anonymous access key sent with every table request.
    pub supabase_anon_key: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => {
                write!(f, "required environment variable {} is not set", name)
            }
        }
    }
}

impl StdError for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PUBLIC_SUPABASE_URL").ok(),
            std::env::var("PUBLIC_SUPABASE_ANON_KEY").ok(),
        )
    }

    fn from_vars(url: Option<String>, anon_key: Option<String>) -> Result<Self, ConfigError> {
        let supabase_url = url
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("PUBLIC_SUPABASE_URL"))?;
        let supabase_anon_key = anon_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("PUBLIC_SUPABASE_ANON_KEY"))?;

        Ok(Self {
            supabase_url,
            supabase_anon_key,
        })
    }
}
