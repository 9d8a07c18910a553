use serde_derive::Deserialize;
use std::fs;
use std::{io, path::Path};

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

#[derive(PartialEq, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(PartialEq, Debug, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    GITHUB_API_BASE_URL.to_owned()
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> io::Result<Self> {
        let config_s = fs::read_to_string(file_path)?;
        let config = toml::from_str(&config_s)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    extern crate pretty_assertions;
    extern crate uuid;

    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use uuid::Uuid;

    #[test]
    fn parse_from_toml() {
        let config: Config = toml::from_str(
            r#"
        [github]
        base_url = "http://localhost:8080"
    "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                github: GithubConfig {
                    base_url: "http://localhost:8080".to_owned()
                }
            }
        )
    }

    #[test]
    fn empty_config_falls_back_to_the_public_api() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.github.base_url, GITHUB_API_BASE_URL);
    }

    #[test]
    fn reads_config_from_file() {
        let mut path = env::temp_dir();
        path.push(format!("ghactivity-config-{}.toml", Uuid::new_v4()));
        fs::write(&path, "[github]\nbase_url = \"http://localhost:8080\"\n")
            .expect("Couldn't write config file");

        let config = Config::from_file(&path).expect("Couldn't read config file");
        assert_eq!(config.github.base_url, "http://localhost:8080");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let mut path = env::temp_dir();
        path.push(format!("ghactivity-config-{}.toml", Uuid::new_v4()));
        assert!(Config::from_file(&path).is_err());
    }
}
