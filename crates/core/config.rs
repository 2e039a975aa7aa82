//! Service configuration.
//!
//! Every field has a serde default so partial JSON (or TOML, with the `toml`
//! feature) documents are accepted. Unknown fields are rejected.
use serde::de::Error;

/// Tunables shared by the service core and its transport.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Capacity of the per-call channel that carries chat echoes to the writer
    #[serde(default = "Config::default_chat_buffer")]
    pub chat_buffer: usize,

    /// Largest frame payload accepted by the wire codec, in bytes
    #[serde(default = "Config::default_max_frame_size")]
    pub max_frame_size: usize,
}

impl Config {
    const fn default_chat_buffer() -> usize {
        64
    }

    const fn default_max_frame_size() -> usize {
        10 * 1024 * 1024
    }

    pub fn with_chat_buffer(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Chat buffer must be greater than zero");
        self.chat_buffer = capacity;
        self
    }

    pub fn with_max_frame_size(mut self, bytes: usize) -> Self {
        assert!(bytes > 0, "Max frame size must be greater than zero");

        if bytes > 256 * 1024 * 1024 {
            log::warn!(
                "Max frame size of {} bytes is very large; a single peer can make the \
                server buffer that much before decoding fails.",
                bytes
            );
        }

        self.max_frame_size = bytes;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.chat_buffer == 0 {
            return Err("Chat buffer must be greater than zero".to_string());
        }

        if self.max_frame_size == 0 {
            return Err("Max frame size must be greater than zero".to_string());
        }

        if self.max_frame_size > u32::MAX as usize {
            return Err(format!(
                "Max frame size {} does not fit the 32-bit length prefix",
                self.max_frame_size
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_buffer: Self::default_chat_buffer(),
            max_frame_size: Self::default_max_frame_size(),
        }
    }
}
