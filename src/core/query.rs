use crate::domain::model::{ConsultationMode, DoctorRecord, QueryCriteria, SortMode};

/// Filter and sort `doctors` by `criteria`, returning a new list.
///
/// Filters keep the relative order of the input; both sorts are stable, so
/// records with equal keys stay in filter-output order.
pub fn apply_query(doctors: &[DoctorRecord], criteria: &QueryCriteria) -> Vec<DoctorRecord> {
    let search = criteria.search.to_lowercase();

    let mut derived: Vec<DoctorRecord> = doctors
        .iter()
        .filter(|doctor| matches_specialties(doctor, criteria))
        .filter(|doctor| matches_mode(doctor, criteria.mode))
        .filter(|doctor| matches_search(doctor, &search))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::None => {}
        SortMode::FeeAscending => derived.sort_by_key(|doctor| doctor.fee),
        SortMode::ExperienceDescending => {
            derived.sort_by(|a, b| b.experience_years.cmp(&a.experience_years))
        }
    }

    derived
}

fn matches_specialties(doctor: &DoctorRecord, criteria: &QueryCriteria) -> bool {
    if criteria.specialties.is_empty() {
        return true;
    }
    let specialty = doctor.specialty.to_lowercase();
    criteria
        .specialties
        .iter()
        .any(|active| specialty.contains(&active.label().to_lowercase()))
}

fn matches_mode(doctor: &DoctorRecord, mode: ConsultationMode) -> bool {
    match mode {
        ConsultationMode::All => true,
        ConsultationMode::VideoOnly => doctor.video_consult,
        ConsultationMode::ClinicOnly => doctor.in_clinic,
    }
}

// `needle` is already lowercased.
fn matches_search(doctor: &DoctorRecord, needle: &str) -> bool {
    needle.is_empty()
        || doctor.name.to_lowercase().contains(needle)
        || doctor.specialty.to_lowercase().contains(needle)
}
