//! Shape of the doctor directory payload and its mapping onto [`DoctorRecord`].
//!
//! Every field is optional on the wire. Missing or malformed values fall back to
//! defaults per item; only a payload that is not a JSON array fails as a whole.

use crate::domain::model::DoctorRecord;
use crate::utils::error::{FinderError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorPayload {
    pub id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "specialities", deserialize_with = "null_as_default")]
    pub specialties: Vec<NamedEntry>,
    pub experience: Value,
    pub fees: Value,
    pub photo: Option<String>,
    pub languages: Option<Vec<String>>,
    pub video_consult: Option<bool>,
    pub in_clinic: Option<bool>,
    pub clinic: Option<ClinicPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClinicPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub address: Option<AddressPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub locality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
}

impl DoctorPayload {
    pub fn into_record(self, placeholder_image: &str) -> DoctorRecord {
        let specialty = self
            .specialties
            .into_iter()
            .next()
            .map(|entry| entry.name)
            .unwrap_or_default();

        let (clinic, locality) = match self.clinic {
            Some(clinic) => {
                let locality = clinic
                    .address
                    .map(|address| address.locality)
                    .unwrap_or_default();
                (clinic.name, locality)
            }
            None => (String::new(), String::new()),
        };

        let image_url = match self.photo {
            Some(photo) if !photo.trim().is_empty() => photo,
            _ => placeholder_image.to_string(),
        };

        DoctorRecord {
            id: identifier(&self.id),
            name: self.name,
            specialty,
            experience_years: leading_number(&self.experience),
            locality,
            clinic,
            fee: leading_number(&self.fees),
            image_url,
            languages: self.languages.unwrap_or_default(),
            video_consult: self.video_consult.unwrap_or(false),
            in_clinic: self.in_clinic.unwrap_or(false),
        }
    }
}

/// Decode a whole response body into records.
pub fn parse_doctors(body: &[u8], placeholder_image: &str) -> Result<Vec<DoctorRecord>> {
    let json: Value = serde_json::from_slice(body)?;
    records_from_value(json, placeholder_image)
}

pub fn records_from_value(json: Value, placeholder_image: &str) -> Result<Vec<DoctorRecord>> {
    let items = match json {
        Value::Array(items) => items,
        other => {
            return Err(FinderError::UnexpectedPayload {
                message: format!("expected a JSON array, got {}", value_kind(&other)),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let payload: DoctorPayload = serde_json::from_value(item)?;
        records.push(payload.into_record(placeholder_image));
    }
    Ok(records)
}

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn identifier(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Integer from the leading digits of a string such as `"₹ 500"` or `"13 Years of experience"`.
/// Currency glyphs and whitespace in front of the digits are skipped; anything else yields 0.
pub fn leading_number(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        Value::String(s) => parse_leading_digits(s),
        _ => 0,
    }
}

fn parse_leading_digits(text: &str) -> u32 {
    let stripped = text.trim_start_matches(|c: char| c.is_whitespace() || is_currency_glyph(c));
    let digits: String = stripped.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn is_currency_glyph(c: char) -> bool {
    matches!(c, '₹' | '$' | '€' | '£' | '¥')
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
