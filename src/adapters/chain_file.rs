use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, ChainConfig, ChainFormat};
use crate::ports::ChainSource;

/// Filesystem-based chain source; the format follows the file extension.
#[derive(Debug, Clone)]
pub struct FileChainSource {
    path: PathBuf,
}

impl FileChainSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ChainSource for FileChainSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ChainConfig, AppError> {
        if !self.path.exists() {
            return Err(AppError::ChainFileNotFound(self.describe()));
        }
        let format = ChainFormat::from_path(&self.path)?;
        debug!("loading chain declaration from {} as {:?}", self.path.display(), format);

        let content = fs::read_to_string(&self.path)?;
        ChainConfig::parse(&content, format)
    }
}
