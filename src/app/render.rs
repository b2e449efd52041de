use crate::domain::model::{DoctorRecord, ListView};

pub const LOADING_TEXT: &str = "Loading doctors...";
pub const NO_RESULTS_TEXT: &str = "No doctors found";

pub fn render_list(view: ListView<'_>) -> String {
    match view {
        ListView::Loading => LOADING_TEXT.to_string(),
        ListView::NoResults => NO_RESULTS_TEXT.to_string(),
        ListView::Doctors(doctors) => doctors
            .iter()
            .map(render_doctor)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_doctor(doctor: &DoctorRecord) -> String {
    let place: Vec<&str> = [doctor.clinic.as_str(), doctor.locality.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    let mut lines = vec![doctor.name.clone()];
    if !doctor.specialty.is_empty() {
        lines.push(format!("  {}", doctor.specialty));
    }
    lines.push(format!("  {} yrs exp.", doctor.experience_years));
    if !doctor.languages.is_empty() {
        lines.push(format!("  Speaks: {}", doctor.languages.join(", ")));
    }
    if !place.is_empty() {
        lines.push(format!("  {}", place.join(", ")));
    }
    lines.push(format!("  ₹{} | {}", doctor.fee, consultation_label(doctor)));
    lines.push(format!("  [Book Appointment: {}]", doctor.id));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn consultation_label(doctor: &DoctorRecord) -> &'static str {
    match (doctor.video_consult, doctor.in_clinic) {
        (true, true) => "Video & In-clinic",
        (true, false) => "Video consult",
        (false, true) => "In-clinic",
        (false, false) => "Consultation mode unknown",
    }
}
