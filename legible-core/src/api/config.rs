//! Analyzer configuration

use crate::error::{Error, Result};
use crate::fry::{DEFAULT_SAMPLES, DEFAULT_WINDOW_SIZE};

/// Default configuration constants
pub mod defaults {
    /// Embedded segmenter rule set
    pub const SEGMENTER: &str = "en";

    /// Results kept by the analysis cache
    pub const CACHE_CAPACITY: usize = 256;
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) segmenter: String,
    pub(crate) window_size: usize, // words per Fry window
    pub(crate) samples: usize,     // Fry windows averaged
    pub(crate) cache_capacity: usize, // 0 = no cache
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segmenter: defaults::SEGMENTER.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            samples: DEFAULT_SAMPLES,
            cache_capacity: defaults::CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Code of the embedded segmenter rule set
    pub fn segmenter(&self) -> &str {
        &self.segmenter
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.segmenter.trim().is_empty() {
            return Err(Error::Configuration(
                "segmenter must not be empty".into(),
            ));
        }

        if self.window_size == 0 {
            return Err(Error::Configuration(
                "window_size must be greater than 0".into(),
            ));
        }

        if self.samples == 0 {
            return Err(Error::Configuration(
                "samples must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    segmenter: Option<String>,
    window_size: Option<usize>,
    samples: Option<usize>,
    cache_capacity: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedded segmenter rule set by code
    pub fn segmenter(mut self, code: impl Into<String>) -> Self {
        self.segmenter = Some(code.into());
        self
    }

    /// Set the words per Fry window
    pub fn window_size(mut self, words: usize) -> Self {
        self.window_size = Some(words);
        self
    }

    /// Set the number of Fry windows averaged
    pub fn samples(mut self, count: usize) -> Self {
        self.samples = Some(count);
        self
    }

    /// Set the cache capacity (0 disables caching)
    pub fn cache_capacity(mut self, entries: usize) -> Self {
        self.cache_capacity = Some(entries);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.segmenter {
            config.segmenter = code;
        }

        if let Some(words) = self.window_size {
            config.window_size = words;
        }

        if let Some(count) = self.samples {
            config.samples = count;
        }

        if let Some(entries) = self.cache_capacity {
            config.cache_capacity = entries;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.segmenter(), "en");
        assert_eq!(config.window_size(), 100);
        assert_eq!(config.samples(), 3);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .segmenter("english")
            .window_size(50)
            .samples(4)
            .cache_capacity(0)
            .build()
            .unwrap();
        assert_eq!(config.segmenter(), "english");
        assert_eq!(config.window_size(), 50);
        assert_eq!(config.samples(), 4);
        assert_eq!(config.cache_capacity(), 0);
    }

    #[test]
    fn test_validation() {
        for builder in [
            ConfigBuilder::new().window_size(0),
            ConfigBuilder::new().samples(0),
            ConfigBuilder::new().segmenter("  "),
        ] {
            assert!(matches!(builder.build(), Err(Error::Configuration(_))));
        }
    }
}
