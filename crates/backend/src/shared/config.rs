use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    /// Directory served as static files (map resource and region imagery)
    pub static_dir: String,
    /// Vector map resource, relative to `static_dir`
    pub svg_path: String,
}

impl MapConfig {
    pub fn static_root(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }

    /// Resolved location of the vector map resource on disk. A leading `/`
    /// is read as URL-style, still relative to `static_dir`.
    pub fn svg_file(&self) -> PathBuf {
        self.static_root()
            .join(self.svg_path.trim_start_matches('/'))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[map]
static_dir = "public"
svg_path = "map/indonesia.svg"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.map.static_dir, "public");
        assert_eq!(
            config.map.svg_file(),
            Path::new("public").join("map").join("indonesia.svg")
        );
    }

    #[test]
    fn test_svg_path_resolution() {
        let map = MapConfig {
            static_dir: "assets".to_string(),
            svg_path: "/map/indonesia.svg".to_string(),
        };
        assert_eq!(
            map.svg_file(),
            Path::new("assets").join("map").join("indonesia.svg")
        );
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[server]\nhost = \"127.0.0.1\"\nport = 8080\n");
        assert!(config.is_err());
    }
}
