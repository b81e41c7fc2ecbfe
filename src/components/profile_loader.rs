use crate::backend::participant::Participant;
use crate::backend::user_profiles::{FetchError, ProfileFetcher};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Participant),
    Failed,
}

/// A dispatched fetch. Only the ticket with the latest generation may settle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub profile_id: String,
    pub id_token: String,
}

/// Fetch state for the profile modal.
#[derive(Debug, Default)]
pub struct ProfileLoader {
    state: FetchState,
    generation: u64,
}

impl ProfileLoader {
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Idle | FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, FetchState::Failed)
    }

    pub fn participant(&self) -> Option<&Participant> {
        match &self.state {
            FetchState::Loaded(p) => Some(p),
            _ => None,
        }
    }

    /// Starts a fetch for `profile_id`. An absent id leaves the loader untouched.
    pub fn begin(&mut self, profile_id: Option<&str>, id_token: &str) -> Option<FetchTicket> {
        let profile_id = present(profile_id)?;
        self.generation += 1;
        self.state = FetchState::Loading;
        Some(FetchTicket {
            generation: self.generation,
            profile_id: profile_id.to_string(),
            id_token: id_token.to_string(),
        })
    }

    /// Applies a fetch result. Returns false when the ticket was superseded and
    /// the result dropped.
    pub fn settle(&mut self, ticket: &FetchTicket, result: Result<Participant, FetchError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                profile_id = %ticket.profile_id,
                generation = ticket.generation,
                latest = self.generation,
                "Discarding stale profile response"
            );
            return false;
        }

        self.state = match result {
            Ok(participant) => FetchState::Loaded(participant),
            Err(_) => FetchState::Failed,
        };
        true
    }

    /// Back to `Idle`. In-flight fetches are invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}

/// `None` and the empty string both mean "no profile selected".
pub fn present(profile_id: Option<&str>) -> Option<&str> {
    profile_id.filter(|id| !id.is_empty())
}

/// Runs the fetch described by `ticket`, logging the outcome.
pub async fn fetch_ticket(fetcher: &dyn ProfileFetcher, ticket: &FetchTicket) -> Result<Participant, FetchError> {
    tracing::debug!(profile_id = %ticket.profile_id, generation = ticket.generation, "Fetching recruitment profile");
    let result = fetcher.fetch_profile(&ticket.profile_id, &ticket.id_token).await;
    match &result {
        Ok(participant) => {
            if cfg!(debug_assertions) {
                tracing::debug!(profile_id = %ticket.profile_id, ?participant, "Fetched recruitment profile");
            }
        }
        Err(e) => tracing::warn!(profile_id = %ticket.profile_id, error = %e, "Failed to fetch recruitment profile"),
    }
    result
}

/// Display strings derived from the loaded participant. Empty when nothing is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSummary {
    pub name: String,
    pub subheading: String,
    pub image_url: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl ProfileSummary {
    pub fn from_participant(participant: Option<&Participant>) -> Self {
        let Some(p) = participant else {
            return Self::default();
        };
        Self {
            name: p.full_name(),
            subheading: p.profile.country_of_residence.clone(),
            image_url: p.profile.profile_picture.clone(),
            linkedin: p.linkedin().map(str::to_string),
            github: p.github().map(str::to_string),
        }
    }
}
