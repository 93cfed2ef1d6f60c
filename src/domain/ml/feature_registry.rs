use std::collections::HashMap;

use super::encoder::{EncoderSet, LabelEncoder};
use crate::domain::errors::InputError;

/// Ordered list of form fields.
/// This order MUST match exactly with the column order used when the model was trained.
/// Any change here is a breaking change for the model artifact.
pub const FIELD_NAMES: &[&str] = &[
    "Fan",
    "Refrigerator",
    "Air Conditioner",
    "Television",
    "Monitor",
    "MotorPump",
    "Month",
    "City",
    "Company",
    "Monthly Hours",
    "Tariff Rate",
];

/// Fields submitted as label-encoded indices from a dropdown.
pub const CATEGORICAL_FIELDS: &[&str] = &["City", "Company"];

pub fn is_categorical(field: &str) -> bool {
    CATEGORICAL_FIELDS.contains(&field)
}

/// Model input, one value per entry of [`FIELD_NAMES`], in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a [`FeatureVector`] from submitted form values.
///
/// Categorical fields must carry an index known to their encoder; a field with
/// no encoder in `encoders` is only checked for being numeric.
pub fn assemble(
    form: &HashMap<String, String>,
    encoders: &EncoderSet,
) -> Result<FeatureVector, InputError> {
    let mut values = Vec::with_capacity(FIELD_NAMES.len());

    for field in FIELD_NAMES {
        let raw = form.get(*field).ok_or_else(|| InputError::MissingField {
            field: field.to_string(),
        })?;
        let value = parse_number(field, raw)?;

        if is_categorical(field) {
            if let Some(encoder) = encoders.get(field) {
                check_category(field, raw, value, encoder)?;
            }
        }

        values.push(value);
    }

    Ok(FeatureVector(values))
}

fn parse_number(field: &str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotNumeric {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

fn check_category(
    field: &str,
    raw: &str,
    value: f64,
    encoder: &LabelEncoder,
) -> Result<(), InputError> {
    let is_index = value >= 0.0 && value.fract() == 0.0;
    if is_index && encoder.name_of(value as usize).is_some() {
        Ok(())
    } else {
        Err(InputError::UnknownCategory {
            field: field.to_string(),
            index: raw.trim().to_string(),
            known: encoder.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoders() -> EncoderSet {
        let names = |n: usize| -> Vec<String> { (0..n).map(|i| format!("name-{}", i)).collect() };
        EncoderSet::new()
            .with_encoder("City", LabelEncoder::new(names(5)))
            .with_encoder("Company", LabelEncoder::new(names(3)))
    }

    fn sample_form() -> HashMap<String, String> {
        [
            ("Fan", "2"),
            ("Refrigerator", "1"),
            ("Air Conditioner", "1"),
            ("Television", "1"),
            ("Monitor", "1"),
            ("MotorPump", "0"),
            ("Month", "6"),
            ("City", "3"),
            ("Company", "1"),
            ("Monthly Hours", "200"),
            ("Tariff Rate", "7.5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_assemble_follows_field_order() {
        let vector = assemble(&sample_form(), &encoders()).expect("valid form");

        assert_eq!(vector.len(), FIELD_NAMES.len());
        // Fan is index 0
        assert_eq!(vector.as_slice()[0], 2.0);
        // City is index 7
        assert_eq!(vector.as_slice()[7], 3.0);
        // Tariff Rate is last index (10)
        assert_eq!(vector.as_slice()[10], 7.5);
    }

    #[test]
    fn test_assemble_reports_first_missing_field() {
        let mut form = sample_form();
        form.remove("Monitor");
        form.remove("Tariff Rate");

        assert_eq!(
            assemble(&form, &encoders()),
            Err(InputError::MissingField {
                field: "Monitor".to_string()
            })
        );
    }

    #[test]
    fn test_assemble_rejects_non_numeric_values() {
        for bad in ["abc", "", "NaN", "inf", "1,5"] {
            let mut form = sample_form();
            form.insert("Monthly Hours".to_string(), bad.to_string());

            assert_eq!(
                assemble(&form, &encoders()),
                Err(InputError::NotNumeric {
                    field: "Monthly Hours".to_string(),
                    value: bad.to_string(),
                }),
                "value {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_assemble_trims_whitespace() {
        let mut form = sample_form();
        form.insert("Fan".to_string(), " 4 ".to_string());

        let vector = assemble(&form, &encoders()).expect("trimmed value parses");
        assert_eq!(vector.as_slice()[0], 4.0);
    }

    #[test]
    fn test_assemble_rejects_unknown_category_index() {
        for bad in ["5", "-1", "1.5", "1e300"] {
            let mut form = sample_form();
            form.insert("City".to_string(), bad.to_string());

            match assemble(&form, &encoders()) {
                Err(InputError::UnknownCategory { field, known, .. }) => {
                    assert_eq!(field, "City");
                    assert_eq!(known, 5);
                }
                other => panic!("expected UnknownCategory for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_assemble_accepts_last_category_index() {
        let mut form = sample_form();
        form.insert("City".to_string(), "4".to_string());
        form.insert("Company".to_string(), "2.0".to_string());

        let vector = assemble(&form, &encoders()).expect("last indices are known");
        assert_eq!(vector.as_slice()[7], 4.0);
        assert_eq!(vector.as_slice()[8], 2.0);
    }

    #[test]
    fn test_categorical_fields_are_in_registry() {
        for field in CATEGORICAL_FIELDS {
            assert!(FIELD_NAMES.contains(field));
        }
        assert!(is_categorical("Company"));
        assert!(!is_categorical("Month"));
    }
}
