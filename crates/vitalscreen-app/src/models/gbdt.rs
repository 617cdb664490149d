use std::path::Path;

use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::Array2;

use crate::error::ModelError;
use crate::models::classifier_trait::Classifier;

/// Gradient Boosting Decision Tree (GBDT) classifier restored from a
/// saved artifact.
pub struct GbdtClassifier {
    model: GBDT,
    name: String,
}

impl GbdtClassifier {
    /// Deserialize a `GBDT::save_model` artifact from disk.
    pub fn load(path: &Path, name: &str) -> Result<Self, ModelError> {
        let file = path.to_str().ok_or_else(|| ModelError::Read {
            path: path.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

        std::fs::metadata(path).map_err(|e| ModelError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let model = GBDT::load_model(file).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::info!("loaded {} classifier from {}", name, path.display());

        Ok(GbdtClassifier {
            model,
            name: name.to_string(),
        })
    }
}

impl Classifier for GbdtClassifier {
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<i32>, ModelError> {
        let mut test_x = DataVec::new();
        for row in 0..x.nrows() {
            let features = x.row(row).to_vec();
            test_x.push(Data::new_training_data(features, 1.0, 0.0, None));
        }

        let scores = self.model.predict(&test_x);
        if scores.len() != x.nrows() {
            return Err(ModelError::Predict {
                model: self.name.clone(),
                reason: format!("expected {} predictions, got {}", x.nrows(), scores.len()),
            });
        }

        // LogLikelyhood predictions are probabilities; 0.5 splits the classes.
        Ok(scores.iter().map(|&p| if p > 0.5 { 1 } else { 0 }).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
