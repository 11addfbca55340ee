//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Tax rate applied to junior salaries, as a percentage (default: 15).
    pub tax_rate_simple: f64,

    /// Tax rate applied to mid-level salaries, as a percentage (default: 25).
    pub tax_rate_middle: f64,

    /// Tax rate applied to senior salaries, as a percentage (default: 35).
    pub tax_rate_upper: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let tax_rate_simple = env::var("TAX_RATE_SIMPLE")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .context("TAX_RATE_SIMPLE must be a valid number")?;

        let tax_rate_middle = env::var("TAX_RATE_MIDDLE")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .context("TAX_RATE_MIDDLE must be a valid number")?;

        let tax_rate_upper = env::var("TAX_RATE_UPPER")
            .unwrap_or_else(|_| "35".to_string())
            .parse()
            .context("TAX_RATE_UPPER must be a valid number")?;

        for (name, rate) in [
            ("TAX_RATE_SIMPLE", tax_rate_simple),
            ("TAX_RATE_MIDDLE", tax_rate_middle),
            ("TAX_RATE_UPPER", tax_rate_upper),
        ] {
            if !(0.0..=100.0).contains(&rate) {
                anyhow::bail!("{name} must be a percentage between 0 and 100, got {rate}");
            }
        }

        Ok(Self {
            port,
            cors_allowed_origins,
            tax_rate_simple,
            tax_rate_middle,
            tax_rate_upper,
        })
    }
}
