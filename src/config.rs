/// Configuration of a deque
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_SEPARATOR: &str = " ";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    pub fn new(separator: impl Into<String>, capacity: usize) -> Self {
        let inner = ConfigInner { separator: separator.into(), capacity };
        Self(Arc::new(inner))
    }
}

impl std::ops::Deref for Config {
    type Target = ConfigInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigInner {
    /// Text placed between two rendered elements
    pub separator: String,
    /// Nodes pre-allocated by the arena
    pub capacity: usize,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_owned(), capacity: 0 }
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    inner: ConfigInner,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.inner.separator = separator.into();
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.inner.capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.inner.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.separator, " ");
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new().separator(", ").capacity(32).build();
        assert_eq!(config.separator, ", ");
        assert_eq!(config.capacity, 32);
        assert_eq!(config, Config::new(", ", 32));
    }

    #[test]
    fn test_clone_shares_inner() {
        let config = ConfigBuilder::new().separator("|").build();
        let cloned = config.clone();
        assert!(Arc::ptr_eq(&config.0, &cloned.0));
    }

    #[test]
    fn test_config_serde() {
        let default = ConfigInner::default();
        let bytes = bincode::serialize(&default).unwrap();
        let decoded: ConfigInner = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, default);

        let custom = ConfigBuilder::new().separator(" | ").capacity(64).build();
        let bytes = bincode::serialize(&*custom).unwrap();
        let decoded: ConfigInner = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded.separator, " | ");
        assert_eq!(decoded.capacity, 64);
        assert_eq!(Config::from(decoded), custom);
    }
}
