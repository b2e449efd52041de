use crate::core::query::apply_query;
use crate::core::url_codec::{deserialize_criteria, serialize_criteria};
use crate::domain::model::{
    ConsultationMode, DoctorRecord, ListView, LoadState, Notification, QueryCriteria, SortMode,
    Specialty,
};
use crate::domain::ports::{DoctorSource, Location};
use crate::utils::error::Result;

/// Identifies one issued fetch. Only the ticket of the latest fetch may settle the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Single owner of the raw list, the criteria and the derived list.
///
/// Every criteria change recomputes the derived list and rewrites the page
/// query string in place.
pub struct DoctorListViewModel<L: Location> {
    location: L,
    raw: Vec<DoctorRecord>,
    criteria: QueryCriteria,
    derived: Vec<DoctorRecord>,
    state: LoadState,
    generation: u64,
}

impl<L: Location> DoctorListViewModel<L> {
    /// Seed the criteria from the location's current query string.
    pub fn new(location: L) -> Self {
        let criteria = deserialize_criteria(&location.query());
        tracing::debug!("Initial criteria from URL: {:?}", criteria);

        let mut view_model = Self {
            location,
            raw: Vec::new(),
            criteria,
            derived: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
        };
        view_model.recompute();
        view_model
    }

    pub async fn load<S: DoctorSource + ?Sized>(&mut self, source: &S) {
        let ticket = self.begin_load();
        let result = source.fetch().await;
        self.finish_load(ticket, result);
    }

    /// Mark a fetch as in flight. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        tracing::debug!("Issued fetch generation {}", self.generation);
        FetchTicket(self.generation)
    }

    /// Settle a fetch. Returns `false` and leaves state untouched when the ticket is stale.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<DoctorRecord>>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                "Discarding stale response of generation {} (latest {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        match result {
            Ok(doctors) => {
                tracing::info!("Loaded {} doctors", doctors.len());
                self.raw = doctors;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load doctors: {}", e);
                self.raw = Vec::new();
                self.state = LoadState::Failed {
                    reason: e.to_string(),
                };
            }
        }
        self.recompute();
        true
    }

    pub fn set_specialty(&mut self, specialty: Specialty, on: bool) {
        self.criteria.specialties.set(specialty, on);
        self.commit();
    }

    pub fn toggle_specialty(&mut self, specialty: Specialty) {
        let on = !self.criteria.specialties.is_active(specialty);
        self.set_specialty(specialty, on);
    }

    pub fn set_mode(&mut self, mode: ConsultationMode) {
        self.criteria.mode = mode;
        self.commit();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
        self.commit();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.commit();
    }

    /// Replace the whole criteria record in one update.
    pub fn set_criteria(&mut self, criteria: QueryCriteria) {
        self.criteria = criteria;
        self.commit();
    }

    pub fn clear_all(&mut self) {
        self.set_criteria(QueryCriteria::default());
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.derived
    }

    pub fn raw_doctors(&self) -> &[DoctorRecord] {
        &self.raw
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn view(&self) -> ListView<'_> {
        match self.state {
            LoadState::Idle | LoadState::Loading => ListView::Loading,
            LoadState::Loaded | LoadState::Failed { .. } if self.derived.is_empty() => {
                ListView::NoResults
            }
            LoadState::Loaded | LoadState::Failed { .. } => ListView::Doctors(&self.derived),
        }
    }

    /// Booking is a placeholder: it only produces a notification for the user.
    pub fn book_appointment(&self, doctor_id: &str) -> Notification {
        let message = match self.raw.iter().find(|doctor| doctor.id == doctor_id) {
            Some(doctor) => format!("Booking appointment with {}", doctor.name),
            None => format!("No doctor with id {} was found", doctor_id),
        };
        tracing::info!(doctor_id, "{}", message);
        Notification {
            doctor_id: doctor_id.to_string(),
            message,
        }
    }

    fn commit(&mut self) {
        self.recompute();
        let query = serialize_criteria(&self.criteria);
        self.location.replace_query(&query);
    }

    fn recompute(&mut self) {
        self.derived = apply_query(&self.raw, &self.criteria);
    }
}
