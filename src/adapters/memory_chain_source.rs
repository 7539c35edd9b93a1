use crate::domain::{AppError, ChainConfig, ChainFormat};
use crate::ports::ChainSource;

/// In-memory chain source holding declaration text.
#[derive(Debug, Clone)]
pub struct MemoryChainSource {
    content: String,
    format: ChainFormat,
}

impl MemoryChainSource {
    pub fn new<S: Into<String>>(content: S, format: ChainFormat) -> Self {
        Self { content: content.into(), format }
    }

    pub fn yaml<S: Into<String>>(content: S) -> Self {
        Self::new(content, ChainFormat::Yaml)
    }
}

impl ChainSource for MemoryChainSource {
    fn describe(&self) -> String {
        format!("<memory:{:?}>", self.format).to_lowercase()
    }

    fn load(&self) -> Result<ChainConfig, AppError> {
        ChainConfig::parse(&self.content, self.format)
    }
}
