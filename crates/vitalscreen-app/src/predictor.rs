use std::collections::HashMap;

use ndarray::Array2;

use crate::encode;
use crate::error::{ModelError, PredictError};
use crate::models::store::AppContext;
use crate::schema::{Disease, FieldKind, FormSchema};

/// Raw key/value pairs from one form submission. Nothing survives the
/// request cycle that produced it.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        FormValues::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        FormValues {
            values: pairs.into_iter().collect(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Positive,
    Negative,
}

/// One completed prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub disease: Disease,
    pub outcome: Outcome,
}

/// Build the feature vector for `schema` in declared field order.
///
/// An unselected categorical stays absent rather than silently becoming
/// a code, so a half-filled form fails here instead of producing a
/// meaningless prediction.
pub fn assemble_features(
    schema: &FormSchema,
    values: &FormValues,
) -> Result<Vec<f32>, PredictError> {
    let mut features = Vec::with_capacity(schema.len());

    for field in schema.fields {
        let raw = values.get(field.key).ok_or(PredictError::MissingField {
            field: field.label,
        })?;

        let value = match field.kind {
            FieldKind::Numeric { .. } => {
                raw.trim()
                    .parse::<f32>()
                    .map_err(|_| PredictError::InvalidNumber {
                        field: field.label,
                        value: raw.to_string(),
                    })?
            }
            FieldKind::Categorical { .. } => encode::encode(field, raw)
                .ok_or(PredictError::UnselectedChoice { field: field.label })?,
        };

        features.push(value);
    }

    Ok(features)
}

/// Run one prediction cycle for `disease` against its loaded classifier.
///
/// The feature vector goes in as a single-row batch and the first (only)
/// label comes back out: 1 is positive, anything else negative.
pub fn run_prediction(
    ctx: &AppContext,
    disease: Disease,
    values: &FormValues,
) -> Result<Prediction, PredictError> {
    let schema = disease.schema();
    let features = assemble_features(schema, values)?;

    let batch = Array2::from_shape_vec((1, features.len()), features)
        .expect("row length matches its own shape");

    let labels = ctx.classifier(disease).predict(&batch)?;
    let label = labels.first().copied().ok_or_else(|| {
        PredictError::Model(ModelError::Predict {
            model: disease.slug().to_string(),
            reason: "classifier returned an empty batch".to_string(),
        })
    })?;

    log::debug!("{} prediction: label {}", disease.slug(), label);

    let outcome = if label == 1 {
        Outcome::Positive
    } else {
        Outcome::Negative
    };

    Ok(Prediction { disease, outcome })
}

/// Exact user-facing text for one prediction.
pub fn outcome_message(prediction: &Prediction) -> String {
    match prediction.outcome {
        Outcome::Positive => format!("Positive for {} 😢", prediction.disease.display_name()),
        Outcome::Negative => format!("Negative for {} 😊", prediction.disease.display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictError;

    fn liver_values() -> FormValues {
        let mut values = FormValues::new();
        values.set("age", "45");
        values.set("gender", "Male");
        values.set("tb", "1.2");
        values.set("db", "0.3");
        values.set("alkphos", "200");
        values.set("sgpt", "0");
        values.set("sgot", "0");
        values.set("tp", "0");
        values.set("alb", "0");
        values.set("ag_ratio", "0");
        values
    }

    #[test]
    fn liver_vector_follows_training_column_order() {
        let features = assemble_features(Disease::Liver.schema(), &liver_values()).unwrap();
        assert_eq!(features.len(), 10);
        assert_eq!(&features[..5], &[45.0, 1.0, 1.2, 0.3, 200.0]);
        assert!(features[5..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn missing_field_is_reported_by_label() {
        let mut values = liver_values();
        values.values.remove("tb");
        let err = assemble_features(Disease::Liver.schema(), &values).unwrap_err();
        assert!(matches!(
            err,
            PredictError::MissingField { field: "Total Bilirubin" }
        ));
    }

    #[test]
    fn unparseable_number_is_an_error() {
        let mut values = liver_values();
        values.set("age", "forty-five");
        let err = assemble_features(Disease::Liver.schema(), &values).unwrap_err();
        assert!(matches!(err, PredictError::InvalidNumber { field: "Age", .. }));
    }

    #[test]
    fn placeholder_selection_never_becomes_a_code() {
        let mut values = liver_values();
        values.set("gender", crate::encode::PLACEHOLDER);
        let err = assemble_features(Disease::Liver.schema(), &values).unwrap_err();
        assert!(matches!(
            err,
            PredictError::UnselectedChoice { field: "Gender" }
        ));
    }
}
