use ndarray::Array2;

use crate::error::ModelError;

/// Contract every loaded classifier artifact satisfies. The predictor
/// only ever calls this trait; the concrete artifact format stays an
/// implementation detail of the `models` module.
pub trait Classifier: Send + Sync {
    /// Predict one binary label per input row: 1 for the positive class,
    /// 0 for the negative class.
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<i32>, ModelError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
