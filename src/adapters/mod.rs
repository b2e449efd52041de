// Adapters layer: concrete implementations for external systems (http source, page location).

pub mod http;
pub mod location;

pub use http::HttpDoctorSource;
pub use location::PageLocation;
