use crate::backend::participant::{ActionKind, RecruitmentAction};
use crate::backend::AppCmd;

/// What the profile modal needs from application state.
///
/// Built once at the app root and provided through context as
/// `Rc<dyn RecruitmentStore>`; the modal never reaches for global state.
pub trait RecruitmentStore {
    fn auth_token(&self) -> String;
    fn action_history(&self) -> Vec<RecruitmentAction>;
    fn dispatch_toggle_favorite(&self, profile_id: &str, is_favorite: bool);
}

pub fn actions_for<'a>(history: &'a [RecruitmentAction], profile_id: &str) -> Vec<&'a RecruitmentAction> {
    history.iter().filter(|a| a.user == profile_id).collect()
}

pub fn is_favorite(history: &[RecruitmentAction], profile_id: &str) -> bool {
    actions_for(history, profile_id)
        .iter()
        .any(|a| a.kind == ActionKind::Favorite)
}

/// Distinct favorited profile ids, in the order they were first favorited.
pub fn favorite_profile_ids(history: &[RecruitmentAction]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for action in history.iter().filter(|a| a.kind == ActionKind::Favorite) {
        if !ids.contains(&action.user) {
            ids.push(action.user.clone());
        }
    }
    ids
}

pub fn toggle_favorite(profile_id: &str, is_favorite: bool) -> AppCmd {
    AppCmd::ToggleFavorite {
        profile_id: profile_id.to_string(),
        is_favorite,
    }
}

/// Star click: dispatches the toggle with the flag as it is now. The store
/// owns the flip.
pub fn click_favorite<S: RecruitmentStore + ?Sized>(store: &S, profile_id: &str) {
    let current = is_favorite(&store.action_history(), profile_id);
    store.dispatch_toggle_favorite(profile_id, current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mocks::FakeStore;

    fn history() -> Vec<RecruitmentAction> {
        vec![
            RecruitmentAction::new("p1", ActionKind::Favorite),
            RecruitmentAction::new("p3", ActionKind::Other("contacted".into())),
        ]
    }

    #[test]
    fn test_is_favorite_matches_user_and_kind() {
        let history = history();
        assert!(is_favorite(&history, "p1"));
        assert!(!is_favorite(&history, "p2"));
        assert!(!is_favorite(&history, "p3"));
        assert!(!is_favorite(&[], "p1"));
    }

    #[test]
    fn test_actions_for_filters_by_user() {
        let mut history = history();
        history.push(RecruitmentAction::new("p1", ActionKind::Other("contacted".into())));

        let actions = actions_for(&history, "p1");
        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|a| a.user == "p1"));
        assert!(actions_for(&history, "p9").is_empty());
    }

    #[test]
    fn test_favorite_ids_are_distinct_and_ordered() {
        let history = vec![
            RecruitmentAction::new("p2", ActionKind::Favorite),
            RecruitmentAction::new("p1", ActionKind::Other("contacted".into())),
            RecruitmentAction::new("p1", ActionKind::Favorite),
            RecruitmentAction::new("p2", ActionKind::Favorite),
        ];
        assert_eq!(favorite_profile_ids(&history), vec!["p2".to_string(), "p1".to_string()]);
    }

    #[test]
    fn test_click_dispatches_current_flag() {
        let store = FakeStore { history: history(), ..Default::default() };

        click_favorite(&store, "p2");
        click_favorite(&store, "p1");

        assert_eq!(
            *store.dispatched.borrow(),
            vec![("p2".to_string(), false), ("p1".to_string(), true)]
        );
    }

    #[test]
    fn test_toggle_favorite_command() {
        match toggle_favorite("p1", true) {
            AppCmd::ToggleFavorite { profile_id, is_favorite } => {
                assert_eq!(profile_id, "p1");
                assert!(is_favorite);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
