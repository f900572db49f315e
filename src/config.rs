use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub oembed: Oembed,
    pub embed: Embed,
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(crate::DEFAULT_CONFIG).expect("default config must be valid")
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file '{}'", path.as_ref().display()))?;
        toml::from_str(&data).with_context(|| "invalid config toml")
    }

    /// Loads `path`, or the built-in defaults if it doesn't exist.
    ///
    /// The flag is false when the defaults were used.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<(Self, bool)> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        Self::load(path).map(|config| (config, true))
    }

    pub fn client(&self) -> crate::OembedClient {
        crate::OembedClient::with_ep(&self.oembed.endpoint)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oembed {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.oembed.endpoint, "https://vimeo.com/api/oembed.json");
        assert_eq!((config.embed.width, config.embed.height), (640, 360));
        assert!(!config.embed.secure);
        assert!(!config.embed.autoplay);
        assert_eq!(config.log.file, "vidembed.log");
    }

    #[test]
    fn load() {
        let path = std::env::temp_dir().join(format!("vidembed-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [oembed]
            endpoint = "http://localhost:1234/oembed.json"

            [embed]
            width = 320
            height = 240
            secure = true

            [log]
            file = "other.log"
            "#,
        )
        .unwrap();

        let (config, from_file) = Config::load_or_default(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(from_file);
        assert_eq!(config.client().endpoint(), "http://localhost:1234/oembed.json");
        assert_eq!((config.embed.width, config.embed.height), (320, 240));
        assert!(config.embed.secure);
        assert!(!config.embed.autoplay);
        assert_eq!(config.log.file, "other.log");
    }

    #[test]
    fn missing_file() {
        let (config, from_file) = Config::load_or_default("this/does/not/exist.toml").unwrap();
        assert!(!from_file);
        assert_eq!(config.oembed.endpoint, Config::default().oembed.endpoint);
        assert!(Config::load("this/does/not/exist.toml").is_err());
    }

    #[test]
    fn invalid_toml() {
        let path = std::env::temp_dir().join(format!("vidembed-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[oembed]\nendpoint = 1234\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.to_string(), "invalid config toml");
    }
}
