pub mod participant;
pub mod recruitment;
pub mod store;
pub mod user_profiles;

use participant::{ActionKind, RecruitmentAction};
use store::Store;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppCmd {
    Init,
    FetchActionHistory,
    ToggleFavorite { profile_id: String, is_favorite: bool },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Ready,
    ActionHistoryFetched(Vec<RecruitmentAction>),
}

pub struct Backend {
    store: Store,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Backend {
    pub fn new(
        store: Store,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { store, cmd_rx, event_tx }
    }

    pub async fn run(&mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            self.handle_command(cmd).await;
        }
        tracing::info!("Command channel closed, backend stopping");
    }

    fn emit_history(&self) {
        match self.store.action_history() {
            Ok(history) => {
                let _ = self.event_tx.send(AppEvent::ActionHistoryFetched(history));
            }
            Err(e) => tracing::error!(error = %e, "Failed to read action history"),
        }
    }

    async fn handle_command(&mut self, cmd: AppCmd) {
        match cmd {
            AppCmd::Init => {
                tracing::info!("Backend initialized");
                let _ = self.event_tx.send(AppEvent::Ready);
            }
            AppCmd::FetchActionHistory => {
                self.emit_history();
            }
            AppCmd::ToggleFavorite { profile_id, is_favorite } => {
                // The flag is the state the user saw when clicking, so the flip happens here.
                if is_favorite {
                    match self.store.remove_actions(&profile_id, &ActionKind::Favorite) {
                        Ok(removed) => tracing::debug!(%profile_id, removed, "Removed favorite"),
                        Err(e) => {
                            tracing::error!(%profile_id, error = %e, "Failed to remove favorite");
                            return;
                        }
                    }
                } else {
                    let action = RecruitmentAction::new(profile_id.clone(), ActionKind::Favorite);
                    if let Err(e) = self.store.record_action(&action) {
                        tracing::error!(%profile_id, error = %e, "Failed to record favorite");
                        return;
                    }
                    tracing::debug!(%profile_id, "Recorded favorite");
                }
                self.emit_history();
            }
        }
    }
}

pub async fn init(
    store_path: String,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let store = match Store::new(&store_path) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(path = %store_path, error = %e, "Failed to open action store");
            return;
        }
    };

    let mut backend = Backend::new(store, cmd_rx, event_tx);
    backend.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn spawn_backend() -> (mpsc::UnboundedSender<AppCmd>, mpsc::UnboundedReceiver<AppEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let store = Store::new_in_memory().unwrap();
        let mut backend = Backend::new(store, cmd_rx, event_tx);

        tokio::spawn(async move {
            backend.run().await;
        });

        (cmd_tx, event_rx)
    }

    async fn next_history(event_rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<RecruitmentAction> {
        loop {
            match tokio::time::timeout(Duration::from_secs(5), event_rx.recv()).await {
                Ok(Some(AppEvent::ActionHistoryFetched(history))) => return history,
                Ok(Some(_)) => continue,
                Ok(None) => panic!("Event channel closed"),
                Err(_) => panic!("Timed out waiting for history"),
            }
        }
    }

    #[tokio::test]
    async fn test_init_reports_ready() {
        let (cmd_tx, mut event_rx) = spawn_backend();
        cmd_tx.send(AppCmd::Init).unwrap();

        match tokio::time::timeout(Duration::from_secs(5), event_rx.recv()).await {
            Ok(Some(AppEvent::Ready)) => {}
            other => panic!("Expected Ready event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_favorite_round_trip() {
        let (cmd_tx, mut event_rx) = spawn_backend();

        cmd_tx.send(recruitment::toggle_favorite("p1", false)).unwrap();
        let history = next_history(&mut event_rx).await;
        assert!(recruitment::is_favorite(&history, "p1"));

        cmd_tx.send(recruitment::toggle_favorite("p1", true)).unwrap();
        let history = next_history(&mut event_rx).await;
        assert!(!recruitment::is_favorite(&history, "p1"));
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_history_leaves_other_profiles_alone() {
        let (cmd_tx, mut event_rx) = spawn_backend();

        cmd_tx.send(recruitment::toggle_favorite("p1", false)).unwrap();
        next_history(&mut event_rx).await;
        cmd_tx.send(recruitment::toggle_favorite("p2", false)).unwrap();
        next_history(&mut event_rx).await;
        cmd_tx.send(recruitment::toggle_favorite("p1", true)).unwrap();
        next_history(&mut event_rx).await;

        cmd_tx.send(AppCmd::FetchActionHistory).unwrap();
        let history = next_history(&mut event_rx).await;
        assert_eq!(recruitment::favorite_profile_ids(&history), vec!["p2".to_string()]);
    }
}
