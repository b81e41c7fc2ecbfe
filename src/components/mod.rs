pub mod common;
pub mod nav_bar;
pub mod profile_loader;
pub mod recruitment_page;
pub mod recruitment_profile_info;
pub mod recruitment_user_modal;

use std::rc::Rc;

use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::participant::RecruitmentAction;
use crate::backend::recruitment::{toggle_favorite, RecruitmentStore};
use crate::backend::user_profiles::ProfileFetcher;
use crate::backend::{AppCmd, AppEvent};

/// Store handle provided through context.
pub type SharedStore = Rc<dyn RecruitmentStore>;
/// Profile source provided through context.
pub type SharedFetcher = Rc<dyn ProfileFetcher>;

#[derive(Clone, Copy)]
pub struct AppState {
    pub id_token: Signal<String>,
    pub action_history: Signal<Vec<RecruitmentAction>>,
    pub backend_ready: Signal<bool>,
}

impl AppState {
    pub fn new(id_token: String) -> Self {
        Self {
            id_token: use_signal(|| id_token),
            action_history: use_signal(|| vec![]),
            backend_ready: use_signal(|| false),
        }
    }

    pub fn apply(mut self, event: AppEvent) {
        match event {
            AppEvent::Ready => self.backend_ready.set(true),
            AppEvent::ActionHistoryFetched(history) => self.action_history.set(history),
        }
    }
}

/// Production `RecruitmentStore`: reads app state signals, writes through the backend channel.
#[derive(Clone)]
pub struct AppStore {
    state: AppState,
    cmd_tx: UnboundedSender<AppCmd>,
}

impl AppStore {
    pub fn new(state: AppState, cmd_tx: UnboundedSender<AppCmd>) -> Self {
        Self { state, cmd_tx }
    }
}

impl RecruitmentStore for AppStore {
    fn auth_token(&self) -> String {
        self.state.id_token.read().clone()
    }

    fn action_history(&self) -> Vec<RecruitmentAction> {
        self.state.action_history.read().clone()
    }

    fn dispatch_toggle_favorite(&self, profile_id: &str, is_favorite: bool) {
        if let Err(e) = self.cmd_tx.send(toggle_favorite(profile_id, is_favorite)) {
            tracing::error!(%profile_id, error = ?e, "Failed to send ToggleFavorite command");
        }
    }
}
