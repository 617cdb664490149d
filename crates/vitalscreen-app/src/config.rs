use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings: where to listen and which artifacts to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listen: String,
    pub models: ModelPaths,
}

/// Artifact file per disease tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPaths {
    pub parkinson: PathBuf,
    pub liver: PathBuf,
    pub kidney: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            listen: "127.0.0.1:8750".to_string(),
            models: ModelPaths::default(),
        }
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        ModelPaths {
            parkinson: PathBuf::from("models/parkinson.gbdt.json"),
            liver: PathBuf::from("models/liver.gbdt.json"),
            kidney: PathBuf::from("models/kidney.gbdt.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"listen": "0.0.0.0:9000"}"#).unwrap();
        assert_eq!(config.listen, "0.0.0.0:9000");
        assert_eq!(config.models.liver, PathBuf::from("models/liver.gbdt.json"));
    }

    #[test]
    fn model_paths_override() {
        let config: AppConfig =
            serde_json::from_str(r#"{"models": {"kidney": "/srv/kidney.json"}}"#).unwrap();
        assert_eq!(config.models.kidney, PathBuf::from("/srv/kidney.json"));
        assert_eq!(config.models.parkinson, PathBuf::from("models/parkinson.gbdt.json"));
        assert_eq!(config.listen, "127.0.0.1:8750");
    }
}
