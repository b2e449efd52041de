//! Query-string encoding of [`QueryCriteria`].
//!
//! Only non-default criteria are written, so default criteria encode to an
//! empty string and any missing parameter decodes to its default.

use crate::domain::model::{ConsultationMode, QueryCriteria, SortMode, Specialty};
use url::form_urlencoded;

pub const SPECIALTY_PARAM_PREFIX: &str = "filter-specialty-";
pub const CONSULTATION_PARAM: &str = "consultation-type";
pub const SORT_FEES_PARAM: &str = "sort-fees";
pub const SORT_EXPERIENCE_PARAM: &str = "sort-experience";
pub const SEARCH_PARAM: &str = "search";

const TRUE_MARKER: &str = "true";

/// Encode criteria as a query string (without the leading `?`).
pub fn serialize_criteria(criteria: &QueryCriteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for specialty in criteria.specialties.iter() {
        serializer.append_pair(&specialty_param(specialty), TRUE_MARKER);
    }

    if let Some(mode) = criteria.mode.as_param() {
        serializer.append_pair(CONSULTATION_PARAM, mode);
    }

    match criteria.sort {
        SortMode::None => {}
        SortMode::FeeAscending => {
            serializer.append_pair(SORT_FEES_PARAM, TRUE_MARKER);
        }
        SortMode::ExperienceDescending => {
            serializer.append_pair(SORT_EXPERIENCE_PARAM, TRUE_MARKER);
        }
    }

    if !criteria.search.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &criteria.search);
    }

    serializer.finish()
}

/// Decode criteria from a query string; a leading `?` is accepted.
///
/// When both sort markers are present the fee sort wins. Unknown parameters are ignored.
pub fn deserialize_criteria(query: &str) -> QueryCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    let value_of = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };
    let is_marked = |name: &str| value_of(name) == Some(TRUE_MARKER);

    let mut criteria = QueryCriteria::default();

    for specialty in Specialty::ALL {
        if is_marked(&specialty_param(specialty)) {
            criteria.specialties.set(specialty, true);
        }
    }

    criteria.mode = value_of(CONSULTATION_PARAM)
        .map(ConsultationMode::from_param)
        .unwrap_or_default();

    criteria.sort = if is_marked(SORT_FEES_PARAM) {
        SortMode::FeeAscending
    } else if is_marked(SORT_EXPERIENCE_PARAM) {
        SortMode::ExperienceDescending
    } else {
        SortMode::None
    };

    criteria.search = value_of(SEARCH_PARAM).unwrap_or_default().to_string();

    criteria
}

fn specialty_param(specialty: Specialty) -> String {
    format!("{}{}", SPECIALTY_PARAM_PREFIX, specialty.key())
}
