use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const SUPPORTED_FORMATS: &[&str] = &["text", "json", "markdown", "html"];

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub default_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let catalog_path = env::var("CVANALYZER_CATALOG").ok().map(PathBuf::from);

        let default_format =
            env::var("CVANALYZER_FORMAT").unwrap_or_else(|_| "text".to_string());

        if !SUPPORTED_FORMATS.contains(&default_format.as_str()) {
            return Err(Error::Config(format!(
                "unsupported output format: {}",
                default_format
            )));
        }

        Ok(Self {
            catalog_path,
            default_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_format: "text".to_string(),
        }
    }
}
