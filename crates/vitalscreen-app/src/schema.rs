use serde::{Deserialize, Serialize};

/// The three screening tabs the app serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Parkinson,
    Liver,
    Kidney,
}

/// One selectable answer of a categorical field, with the numeric code
/// the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub label: &'static str,
    pub code: f32,
}

/// Widget kind and constraints for one input field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Numeric {
        min: Option<f32>,
        max: Option<f32>,
        step: f32,
    },
    Categorical {
        choices: &'static [Choice],
    },
}

/// One input field of a screening form.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// The ordered field list one classifier was trained on.
///
/// Field order is the training-time column order; the predictor walks it
/// verbatim when assembling the feature vector.
#[derive(Debug)]
pub struct FormSchema {
    pub disease: Disease,
    pub fields: &'static [Field],
}

impl FormSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

const fn numeric(
    key: &'static str,
    label: &'static str,
    min: Option<f32>,
    max: Option<f32>,
    step: f32,
) -> Field {
    Field {
        key,
        label,
        kind: FieldKind::Numeric { min, max, step },
    }
}

const fn categorical(key: &'static str, label: &'static str, choices: &'static [Choice]) -> Field {
    Field {
        key,
        label,
        kind: FieldKind::Categorical { choices },
    }
}

const fn choice(label: &'static str, code: f32) -> Choice {
    Choice { label, code }
}

const GENDER: &[Choice] = &[choice("Male", 1.0), choice("Female", 0.0)];
const YES_NO: &[Choice] = &[choice("Yes", 1.0), choice("No", 0.0)];
const PRESENT: &[Choice] = &[choice("Present", 1.0), choice("Not present", 0.0)];
const NORMAL_ABNORMAL: &[Choice] = &[choice("Normal", 0.0), choice("Abnormal", 1.0)];
const APPETITE: &[Choice] = &[choice("Good", 1.0), choice("Poor", 0.0)];

const PARKINSON_FIELDS: &[Field] = &[
    numeric("fo", "MDVP:Fo(Hz) - Average vocal fundamental frequency", Some(0.0), None, 0.1),
    numeric("fhi", "MDVP:Fhi(Hz) - Maximum vocal fundamental frequency", Some(0.0), None, 0.1),
    numeric("flo", "MDVP:Flo(Hz) - Minimum vocal fundamental frequency", Some(0.0), None, 0.1),
    numeric("jitter_pct", "MDVP:Jitter(%) - Cycle-to-cycle frequency variation", Some(0.0), None, 0.001),
    numeric("jitter_abs", "MDVP:Jitter(Abs) - Absolute jitter in microseconds", Some(0.0), None, 0.000001),
    numeric("rap", "MDVP:RAP - Relative amplitude perturbation", Some(0.0), None, 0.001),
    numeric("ppq", "MDVP:PPQ - Five-point period perturbation quotient", Some(0.0), None, 0.001),
    numeric("ddp", "Jitter:DDP - Average difference of differences between cycles", Some(0.0), None, 0.001),
    numeric("shimmer", "MDVP:Shimmer - Variation in amplitude", Some(0.0), None, 0.001),
    numeric("shimmer_db", "MDVP:Shimmer(dB) - Amplitude variation in decibels", Some(0.0), None, 0.01),
    numeric("apq3", "Shimmer:APQ3 - Three-point amplitude perturbation quotient", Some(0.0), None, 0.001),
    numeric("apq5", "Shimmer:APQ5 - Five-point amplitude perturbation quotient", Some(0.0), None, 0.001),
    numeric("apq", "MDVP:APQ - Eleven-point amplitude perturbation quotient", Some(0.0), None, 0.001),
    numeric("dda", "Shimmer:DDA - Average absolute difference of consecutive differences", Some(0.0), None, 0.001),
    numeric("nhr", "NHR - Noise-to-harmonics ratio", Some(0.0), None, 0.001),
    numeric("hnr", "HNR - Harmonics-to-noise ratio", Some(0.0), None, 0.1),
    numeric("rpde", "RPDE - Recurrence period density entropy", Some(0.0), Some(1.0), 0.001),
    numeric("dfa", "DFA - Signal fractal scaling exponent", Some(0.0), Some(1.0), 0.001),
    numeric("spread1", "Spread1 - Nonlinear measure of fundamental frequency variation", Some(-100.0), None, 0.1),
    numeric("spread2", "Spread2 - Spread of frequency", Some(-100.0), None, 0.1),
    numeric("d2", "D2 - Correlation dimension", Some(0.0), None, 0.001),
    numeric("ppe", "PPE - Pitch period entropy", Some(0.0), None, 0.001),
];

const LIVER_FIELDS: &[Field] = &[
    numeric("age", "Age", Some(1.0), Some(120.0), 1.0),
    categorical("gender", "Gender", GENDER),
    numeric("tb", "Total Bilirubin", Some(0.0), None, 0.1),
    numeric("db", "Direct Bilirubin", Some(0.0), None, 0.1),
    numeric("alkphos", "Alkaline Phosphotase", Some(0.0), None, 1.0),
    numeric("sgpt", "Alamine Aminotransferase", Some(0.0), None, 1.0),
    numeric("sgot", "Aspartate Aminotransferase", Some(0.0), None, 1.0),
    numeric("tp", "Total Proteins", Some(0.0), None, 0.1),
    numeric("alb", "Albumin", Some(0.0), None, 0.1),
    numeric("ag_ratio", "Albumin and Globulin Ratio", Some(0.0), None, 0.01),
];

const KIDNEY_FIELDS: &[Field] = &[
    numeric("age", "Age", Some(1.0), Some(120.0), 1.0),
    numeric("bp", "Blood Pressure (mm Hg)", Some(40.0), Some(200.0), 1.0),
    numeric("sg", "Specific Gravity", Some(1.0), Some(1.03), 0.001),
    numeric("al", "Albumin", Some(0.0), Some(5.0), 1.0),
    categorical("su", "Sugar (urine dipstick)", PRESENT),
    categorical("rbc", "Red blood cells", NORMAL_ABNORMAL),
    categorical("pc", "Pus cell", NORMAL_ABNORMAL),
    categorical("pcc", "Pus cell clumps", PRESENT),
    categorical("ba", "Bacteria", PRESENT),
    numeric("bgr", "Blood Glucose Random (mg/dL)", Some(0.0), None, 1.0),
    numeric("bu", "Blood Urea (mg/dL)", Some(0.0), None, 1.0),
    numeric("sc", "Serum Creatinine (mg/dL)", Some(0.0), None, 0.1),
    numeric("sod", "Sodium (mEq/L)", Some(0.0), None, 1.0),
    numeric("pot", "Potassium (mEq/L)", Some(0.0), None, 0.1),
    numeric("hemo", "Hemoglobin (g/dL)", Some(0.0), None, 0.1),
    numeric("pcv", "Packed Cell Volume", Some(0.0), None, 1.0),
    numeric("wc", "White Blood Cell Count (cells/cmm)", Some(0.0), None, 100.0),
    numeric("rc", "Red Blood Cell Count (millions/cmm)", Some(0.0), None, 0.1),
    categorical("htn", "Hypertension", YES_NO),
    categorical("dm", "Diabetes Mellitus", YES_NO),
    categorical("cad", "Coronary Artery Disease", YES_NO),
    categorical("appet", "Appetite", APPETITE),
    categorical("pe", "Pedal Edema", YES_NO),
    categorical("ane", "Anemia", YES_NO),
];

static PARKINSON_SCHEMA: FormSchema = FormSchema {
    disease: Disease::Parkinson,
    fields: PARKINSON_FIELDS,
};

static LIVER_SCHEMA: FormSchema = FormSchema {
    disease: Disease::Liver,
    fields: LIVER_FIELDS,
};

static KIDNEY_SCHEMA: FormSchema = FormSchema {
    disease: Disease::Kidney,
    fields: KIDNEY_FIELDS,
};

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Parkinson, Disease::Liver, Disease::Kidney];

    /// Stable identifier used in URLs and the hidden form field.
    pub fn slug(self) -> &'static str {
        match self {
            Disease::Parkinson => "parkinson",
            Disease::Liver => "liver",
            Disease::Kidney => "kidney",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Disease> {
        match slug {
            "parkinson" => Some(Disease::Parkinson),
            "liver" => Some(Disease::Liver),
            "kidney" => Some(Disease::Kidney),
            _ => None,
        }
    }

    /// Name used inside the outcome messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Disease::Parkinson => "Parkinson's Disease",
            Disease::Liver => "Liver Disease",
            Disease::Kidney => "Kidney Disease",
        }
    }

    /// Sidebar navigation label.
    pub fn tab_label(self) -> &'static str {
        match self {
            Disease::Parkinson => "Parkinson's Prediction",
            Disease::Liver => "Liver Patient Prediction",
            Disease::Kidney => "Kidney Prediction",
        }
    }

    /// Main panel header.
    pub fn title(self) -> &'static str {
        match self {
            Disease::Parkinson => "Parkinson's Disease Prediction",
            Disease::Liver => "Liver Disease Prediction",
            Disease::Kidney => "Kidney Disease Prediction",
        }
    }

    /// One-line instruction shown under the header.
    pub fn description(self) -> &'static str {
        match self {
            Disease::Parkinson => "Enter the required details to predict Parkinson's disease.",
            Disease::Liver => "Enter the required details to predict liver disease.",
            Disease::Kidney => "Enter the required details to predict kidney disease.",
        }
    }

    /// Sidebar blurb describing what the model screens for.
    pub fn sidebar_note(self) -> &'static str {
        match self {
            Disease::Parkinson => {
                "Estimates the likelihood of Parkinson's disease from vocal measurements."
            }
            Disease::Liver => "Flags potential liver disease from routine blood chemistry.",
            Disease::Kidney => "Assesses chronic kidney disease risk from lab test results.",
        }
    }

    pub fn schema(self) -> &'static FormSchema {
        match self {
            Disease::Parkinson => &PARKINSON_SCHEMA,
            Disease::Liver => &LIVER_SCHEMA,
            Disease::Kidney => &KIDNEY_SCHEMA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(schema: &FormSchema) -> (usize, usize) {
        let numeric = schema
            .fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Numeric { .. }))
            .count();
        (numeric, schema.len() - numeric)
    }

    #[test]
    fn field_counts_match_training_schemas() {
        assert_eq!(Disease::Parkinson.schema().len(), 22);
        assert_eq!(Disease::Liver.schema().len(), 10);
        assert_eq!(Disease::Kidney.schema().len(), 24);
    }

    #[test]
    fn parkinson_is_all_numeric() {
        assert_eq!(split(Disease::Parkinson.schema()), (22, 0));
    }

    #[test]
    fn liver_has_one_categorical() {
        assert_eq!(split(Disease::Liver.schema()), (9, 1));
    }

    #[test]
    fn kidney_splits_thirteen_numeric_eleven_categorical() {
        assert_eq!(split(Disease::Kidney.schema()), (13, 11));
    }

    #[test]
    fn liver_column_order_starts_with_age_and_gender() {
        let keys: Vec<&str> = Disease::Liver.schema().fields.iter().map(|f| f.key).collect();
        assert_eq!(&keys[..5], &["age", "gender", "tb", "db", "alkphos"]);
    }

    #[test]
    fn field_keys_are_unique_per_schema() {
        for disease in Disease::ALL {
            let schema = disease.schema();
            for (i, field) in schema.fields.iter().enumerate() {
                assert!(
                    !schema.fields[..i].iter().any(|f| f.key == field.key),
                    "duplicate key {} in {:?}",
                    field.key,
                    disease
                );
            }
        }
    }

    #[test]
    fn slugs_round_trip() {
        for disease in Disease::ALL {
            assert_eq!(Disease::from_slug(disease.slug()), Some(disease));
        }
        assert_eq!(Disease::from_slug("heart"), None);
    }
}
