use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

/// A doctor as shown in the list. Built once from the API payload and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience_years: u32,
    pub locality: String,
    pub clinic: String,
    pub fee: u32,
    pub image_url: String,
    pub languages: Vec<String>,
    pub video_consult: bool,
    pub in_clinic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    Ayurveda,
    Homeopath,
    Dentist,
    Physician,
    Gynecologist,
}

impl Specialty {
    pub const COUNT: usize = 5;

    pub const ALL: [Specialty; Specialty::COUNT] = [
        Specialty::Ayurveda,
        Specialty::Homeopath,
        Specialty::Dentist,
        Specialty::Physician,
        Specialty::Gynecologist,
    ];

    /// Key used in URL parameter names and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Specialty::Ayurveda => "ayurveda",
            Specialty::Homeopath => "homeopath",
            Specialty::Dentist => "dentist",
            Specialty::Physician => "physician",
            Specialty::Gynecologist => "gynecologist",
        }
    }

    /// Text matched (case-insensitively) against a record's specialty.
    pub fn label(self) -> &'static str {
        match self {
            Specialty::Ayurveda => "Ayurveda",
            Specialty::Homeopath => "Homeopath",
            Specialty::Dentist => "Dentist",
            Specialty::Physician => "Physician",
            Specialty::Gynecologist => "Gynecologist",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|specialty| specialty.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let keys: Vec<&str> = Specialty::ALL.iter().map(|s| s.key()).collect();
                format!("unknown specialty '{}', expected one of: {}", s, keys.join(", "))
            })
    }
}

/// One boolean toggle per [`Specialty`]. No active toggle means no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialtySet {
    active: [bool; Specialty::COUNT],
}

impl SpecialtySet {
    pub fn is_active(&self, specialty: Specialty) -> bool {
        self.active[specialty.index()]
    }

    pub fn set(&mut self, specialty: Specialty, on: bool) {
        self.active[specialty.index()] = on;
    }

    pub fn is_empty(&self) -> bool {
        !self.active.iter().any(|on| *on)
    }

    /// Active specialties in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = Specialty> + '_ {
        Specialty::ALL
            .into_iter()
            .filter(move |specialty| self.is_active(*specialty))
    }
}

impl FromIterator<Specialty> for SpecialtySet {
    fn from_iter<I: IntoIterator<Item = Specialty>>(iter: I) -> Self {
        let mut set = SpecialtySet::default();
        for specialty in iter {
            set.set(specialty, true);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationMode {
    #[default]
    All,
    VideoOnly,
    ClinicOnly,
}

impl ConsultationMode {
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            ConsultationMode::All => None,
            ConsultationMode::VideoOnly => Some("video"),
            ConsultationMode::ClinicOnly => Some("clinic"),
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "video" => ConsultationMode::VideoOnly,
            "clinic" => ConsultationMode::ClinicOnly,
            _ => ConsultationMode::All,
        }
    }
}

/// A single sort criterion. Fee and experience sorting are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    None,
    FeeAscending,
    ExperienceDescending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCriteria {
    pub specialties: SpecialtySet,
    pub mode: ConsultationMode,
    pub sort: SortMode,
    pub search: String,
}

impl QueryCriteria {
    pub fn is_default(&self) -> bool {
        *self == QueryCriteria::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed { reason: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// What the list area should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    /// Settled with nothing to show, either because the fetch failed or nothing matched.
    NoResults,
    Doctors(&'a [DoctorRecord]),
}

/// User-visible message raised by the booking action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub doctor_id: String,
    pub message: String,
}
