pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpDoctorSource, PageLocation};
pub use config::{FinderConfig, TomlConfig};
pub use core::view_model::{DoctorListViewModel, FetchTicket};
pub use domain::model::{
    ConsultationMode, DoctorRecord, ListView, LoadState, Notification, QueryCriteria, SortMode,
    Specialty,
};
pub use utils::error::{FinderError, Result};
