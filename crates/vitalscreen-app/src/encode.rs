use crate::schema::{Field, FieldKind};

/// Label shown for the not-yet-chosen state of every categorical field.
///
/// Intentionally absent from every choice mapping: looking it up yields
/// `None`, never a numeric code.
pub const PLACEHOLDER: &str = "Select";

/// Map a submitted categorical label to its trained numeric code.
///
/// The mapping is closed per field: only the labels the field declares
/// resolve, with no case normalization and no fallback. The placeholder,
/// an unknown label, or a numeric field all yield `None`.
pub fn encode(field: &Field, label: &str) -> Option<f32> {
    match field.kind {
        FieldKind::Categorical { choices } => {
            choices.iter().find(|c| c.label == label).map(|c| c.code)
        }
        FieldKind::Numeric { .. } => None,
    }
}
