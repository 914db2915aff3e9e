use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

/// Settings shared by the parser and both evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deepest formula nesting accepted by the parser and walked by the evaluators.
    #[serde(default = "default_max_formula_depth")]
    pub max_formula_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_formula_depth: default_max_formula_depth(),
        }
    }
}

impl EngineConfig {
    // JSONファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn with_max_formula_depth(mut self, max_formula_depth: usize) -> Self {
        self.max_formula_depth = max_formula_depth;
        self
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Config(format!("Failed to open file {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(|e| {
        Error::Config(format!("Failed to parse file {}: {}", path.display(), e))
    })?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Config(format!("Failed to parse JSON: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_max_formula_depth() -> usize {
    512
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(EngineConfig::default().max_formula_depth, 512);
    }

    #[test]
    fn test_from_str_fills_defaults() {
        let config: EngineConfig = from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig = from_str(r#"{"max_formula_depth": 8}"#).unwrap();
        assert_eq!(config.max_formula_depth, 8);
    }

    #[test]
    fn test_from_str_rejects_bad_json() {
        let result: InternalResult<EngineConfig> = from_str(r#"{"max_formula_depth": -1}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = EngineConfig::from_file("/nonexistent/trust-modal.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
