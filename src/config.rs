use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Site generation settings, loaded from a TOML file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of Markdown content to convert.
    pub content: PathBuf,
    /// Directory of static assets mirrored into the output.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Output directory for the generated site.
    pub output: PathBuf,
    /// Prefix substituted into root-relative `href`/`src` attributes.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
