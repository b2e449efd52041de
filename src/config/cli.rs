use crate::config::{FinderConfig, TomlConfig};
use crate::domain::model::{ConsultationMode, QueryCriteria, SortMode, Specialty};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ModeArg {
    All,
    Video,
    Clinic,
}

impl From<ModeArg> for ConsultationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::All => ConsultationMode::All,
            ModeArg::Video => ConsultationMode::VideoOnly,
            ModeArg::Clinic => ConsultationMode::ClinicOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SortArg {
    None,
    Fees,
    Experience,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortMode::None,
            SortArg::Fees => SortMode::FeeAscending,
            SortArg::Experience => SortMode::ExperienceDescending,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "doctor-finder")]
#[command(about = "Browse, filter and sort a doctor directory")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with [source], [display] and [page] settings")]
    pub config: Option<String>,

    #[arg(long, help = "JSON endpoint serving the doctor list")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Page URL whose query string seeds the filters")]
    pub page_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub placeholder_image: Option<String>,

    #[arg(long, value_delimiter = ',', help = "ayurveda, homeopath, dentist, physician, gynecologist")]
    pub specialty: Vec<Specialty>,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, help = "Reset every filter before applying the flags above")]
    pub clear: bool,

    #[arg(long, value_name = "DOCTOR_ID")]
    pub book: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Merge defaults, the optional TOML file and command-line overrides.
    pub fn resolve(&self) -> Result<FinderConfig> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut config = FinderConfig::from_toml(&file);
        if let Some(endpoint) = &self.api_endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(page_url) = &self.page_url {
            config.page_url = page_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(image) = &self.placeholder_image {
            config.placeholder_image = image.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Criteria after applying the flags on top of `base` (the URL-derived criteria).
    /// Flags left unset keep the value from `base`.
    pub fn criteria_over(&self, base: &QueryCriteria) -> QueryCriteria {
        let mut criteria = if self.clear {
            QueryCriteria::default()
        } else {
            base.clone()
        };

        for specialty in &self.specialty {
            criteria.specialties.set(*specialty, true);
        }
        if let Some(mode) = self.mode {
            criteria.mode = mode.into();
        }
        if let Some(sort) = self.sort {
            criteria.sort = sort.into();
        }
        if let Some(search) = &self.search {
            criteria.search = search.clone();
        }
        criteria
    }
}
