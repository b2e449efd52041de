pub mod payload;
pub mod query;
pub mod url_codec;
pub mod view_model;

pub use crate::domain::model::{DoctorRecord, ListView, LoadState, QueryCriteria};
pub use crate::domain::ports::{ConfigProvider, DoctorSource, Location};
pub use crate::utils::error::Result;
