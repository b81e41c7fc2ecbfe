//! Fakes for the profile modal's injected interfaces.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::backend::participant::{Participant, RecruitmentAction};
use crate::backend::recruitment::RecruitmentStore;
use crate::backend::user_profiles::{FetchError, ProfileFetcher};

pub fn ada() -> Participant {
    serde_json::from_value(serde_json::json!({
        "profile": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "countryOfResidence": "UK",
            "profilePicture": "http://x/y.png"
        },
        "social": { "linkedin": "http://li" }
    }))
    .unwrap()
}

pub fn named(first: &str) -> Participant {
    serde_json::from_value(serde_json::json!({
        "profile": { "firstName": first, "lastName": "Test" }
    }))
    .unwrap()
}

/// Records every dispatch instead of talking to a backend.
#[derive(Default)]
pub struct FakeStore {
    pub token: String,
    pub history: Vec<RecruitmentAction>,
    pub dispatched: Rc<RefCell<Vec<(String, bool)>>>,
}

impl RecruitmentStore for FakeStore {
    fn auth_token(&self) -> String {
        self.token.clone()
    }

    fn action_history(&self) -> Vec<RecruitmentAction> {
        self.history.clone()
    }

    fn dispatch_toggle_favorite(&self, profile_id: &str, is_favorite: bool) {
        self.dispatched.borrow_mut().push((profile_id.to_string(), is_favorite));
    }
}

/// Answers with `ada()`, or a 404 when `fail` is set. Calls are recorded.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail: bool,
}

#[async_trait(?Send)]
impl ProfileFetcher for FakeFetcher {
    async fn fetch_profile(&self, profile_id: &str, id_token: &str) -> Result<Participant, FetchError> {
        self.calls.lock().unwrap().push((profile_id.to_string(), id_token.to_string()));
        if self.fail {
            Err(FetchError::Status(StatusCode::NOT_FOUND))
        } else {
            Ok(ada())
        }
    }
}
