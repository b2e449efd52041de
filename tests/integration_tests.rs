use doctor_finder::core::Location;
use doctor_finder::app::render::{render_list, NO_RESULTS_TEXT};
use doctor_finder::{
    ConsultationMode, DoctorListViewModel, HttpDoctorSource, ListView, LoadState, PageLocation,
    SortMode, Specialty,
};
use httpmock::prelude::*;
use std::time::Duration;

const PLACEHOLDER: &str = "https://img.test/placeholder.png";

fn directory() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "101",
            "name": "Dr. Anna Smith",
            "specialities": [{"name": "Dentist"}],
            "experience": "12 Years of experience",
            "fees": "₹ 500",
            "languages": ["English"],
            "video_consult": true,
            "in_clinic": true,
            "clinic": {"name": "Smile Dental", "address": {"locality": "Whitefield"}}
        },
        {
            "id": "102",
            "name": "DR. HANNAH",
            "specialities": [{"name": "General Physician"}],
            "experience": "3 Years of experience",
            "fees": "₹ 100",
            "video_consult": false,
            "in_clinic": true
        },
        {
            "id": "103",
            "name": "Dr. Kumar",
            "specialities": [{"name": "Ayurveda"}],
            "experience": "not a number",
            "video_consult": true,
            "in_clinic": false
        },
        {
            "id": "104",
            "name": "Dr. Joseph",
            "specialities": [{"name": "Dentist"}],
            "experience": "20 Years of experience",
            "fees": "₹ 100",
            "in_clinic": true
        }
    ])
}

fn source(server: &MockServer) -> HttpDoctorSource {
    HttpDoctorSource::new(server.url("/doctors.json"), Duration::from_secs(5), PLACEHOLDER)
}

fn ids<L: doctor_finder::core::Location>(vm: &DoctorListViewModel<L>) -> Vec<String> {
    vm.doctors().iter().map(|d| d.id.clone()).collect()
}

#[tokio::test]
async fn test_end_to_end_filter_sort_and_url() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(directory());
    });

    let location =
        PageLocation::parse("https://clinic.test/find?filter-specialty-dentist=true").unwrap();
    let mut vm = DoctorListViewModel::new(location);
    assert_eq!(vm.view(), ListView::Loading);

    vm.load(&source(&server)).await;
    api_mock.assert();

    assert_eq!(vm.load_state(), &LoadState::Loaded);
    assert_eq!(vm.raw_doctors().len(), 4);
    assert_eq!(ids(&vm), vec!["101", "104"]);

    vm.set_sort(SortMode::FeeAscending);
    assert_eq!(ids(&vm), vec!["104", "101"]);

    vm.set_specialty(Specialty::Physician, true);
    assert_eq!(ids(&vm), vec!["102", "104", "101"]);

    vm.set_mode(ConsultationMode::VideoOnly);
    assert_eq!(ids(&vm), vec!["101"]);

    assert_eq!(
        vm.location().current().as_str(),
        "https://clinic.test/find?filter-specialty-dentist=true&filter-specialty-physician=true\
         &consultation-type=video&sort-fees=true"
    );

    let rendered = render_list(vm.view());
    assert!(rendered.contains("Dr. Anna Smith"));
    assert!(rendered.contains("Smile Dental, Whitefield"));
}

#[tokio::test]
async fn test_malformed_item_defaults() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200).json_body(directory());
    });

    let mut vm = DoctorListViewModel::new(PageLocation::parse("https://clinic.test/").unwrap());
    vm.load(&source(&server)).await;

    let kumar = vm
        .raw_doctors()
        .iter()
        .find(|d| d.id == "103")
        .unwrap();
    assert_eq!(kumar.experience_years, 0);
    assert_eq!(kumar.fee, 0);
    assert_eq!(kumar.image_url, PLACEHOLDER);
    assert!(kumar.languages.is_empty());
}

#[tokio::test]
async fn test_search_and_experience_sort() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200).json_body(directory());
    });

    let location =
        PageLocation::parse("https://clinic.test/?sort-experience=true&search=ann").unwrap();
    let mut vm = DoctorListViewModel::new(location);
    vm.load(&source(&server)).await;

    assert_eq!(ids(&vm), vec!["101", "102"]);

    vm.set_search("");
    assert_eq!(ids(&vm), vec!["104", "101", "102", "103"]);
    assert_eq!(vm.location().query(), "sort-experience=true");
}

#[tokio::test]
async fn test_api_failure_settles_to_no_results() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(500);
    });

    let mut vm = DoctorListViewModel::new(PageLocation::parse("https://clinic.test/").unwrap());
    vm.load(&source(&server)).await;

    api_mock.assert();
    assert!(!vm.is_loading());
    assert!(matches!(vm.load_state(), LoadState::Failed { .. }));
    assert!(vm.doctors().is_empty());
    assert_eq!(render_list(vm.view()), NO_RESULTS_TEXT);
}

#[tokio::test]
async fn test_non_array_payload_is_a_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200).json_body(serde_json::json!({"doctors": []}));
    });

    let mut vm = DoctorListViewModel::new(PageLocation::parse("https://clinic.test/").unwrap());
    vm.load(&source(&server)).await;

    assert!(matches!(vm.load_state(), LoadState::Failed { .. }));
    assert_eq!(vm.view(), ListView::NoResults);
}

#[tokio::test]
async fn test_empty_directory_is_loaded_but_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200).json_body(serde_json::json!([]));
    });

    let mut vm = DoctorListViewModel::new(PageLocation::parse("https://clinic.test/").unwrap());
    vm.load(&source(&server)).await;

    assert_eq!(vm.load_state(), &LoadState::Loaded);
    assert_eq!(vm.view(), ListView::NoResults);
}

#[tokio::test]
async fn test_booking_uses_loaded_directory() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/doctors.json");
        then.status(200).json_body(directory());
    });

    let mut vm = DoctorListViewModel::new(PageLocation::parse("https://clinic.test/").unwrap());
    vm.load(&source(&server)).await;

    let notification = vm.book_appointment("102");
    assert_eq!(notification.doctor_id, "102");
    assert!(notification.message.contains("DR. HANNAH"));
}
