#[cfg(not(target_arch = "wasm32"))]
use rusqlite::{params, Connection};
#[cfg(target_arch = "wasm32")]
use std::sync::{Arc, Mutex};
use std::path::Path;
use chrono::{DateTime, Utc};
use crate::backend::participant::{ActionKind, RecruitmentAction};

/// Append-only log of recruiter actions.
#[derive(Clone)]
pub struct Store {
    #[cfg(not(target_arch = "wasm32"))]
    conn: std::sync::Arc<std::sync::Mutex<Connection>>,
    #[cfg(target_arch = "wasm32")]
    actions: Arc<Mutex<Vec<RecruitmentAction>>>,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS actions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user TEXT NOT NULL,
            kind TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

impl Store {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn: std::sync::Arc::new(std::sync::Mutex::new(conn)) })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new<P: AsRef<Path>>(_path: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::new_in_memory()
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn new_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn: std::sync::Arc::new(std::sync::Mutex::new(conn)) })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self { actions: Arc::new(Mutex::new(Vec::new())) })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn record_action(&self, action: &RecruitmentAction) -> Result<(), Box<dyn std::error::Error>> {
        let conn = self.conn.lock().map_err(|_| "Store lock poisoned")?;
        conn.execute(
            "INSERT INTO actions (user, kind, timestamp) VALUES (?1, ?2, ?3)",
            params![action.user, action.kind.as_str(), action.timestamp.to_rfc3339()],
        )?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn record_action(&self, action: &RecruitmentAction) -> Result<(), Box<dyn std::error::Error>> {
        let mut actions = self.actions.lock().map_err(|_| "Store lock poisoned")?;
        actions.push(action.clone());
        Ok(())
    }

    /// Deletes every action of `kind` targeting `user`. Returns how many were removed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove_actions(&self, user: &str, kind: &ActionKind) -> Result<usize, Box<dyn std::error::Error>> {
        let conn = self.conn.lock().map_err(|_| "Store lock poisoned")?;
        let removed = conn.execute(
            "DELETE FROM actions WHERE user = ?1 AND kind = ?2",
            params![user, kind.as_str()],
        )?;
        Ok(removed)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove_actions(&self, user: &str, kind: &ActionKind) -> Result<usize, Box<dyn std::error::Error>> {
        let mut actions = self.actions.lock().map_err(|_| "Store lock poisoned")?;
        let before = actions.len();
        actions.retain(|a| !(a.user == user && &a.kind == kind));
        Ok(before - actions.len())
    }

    /// Full history, oldest first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn action_history(&self) -> Result<Vec<RecruitmentAction>, Box<dyn std::error::Error>> {
        let conn = self.conn.lock().map_err(|_| "Store lock poisoned")?;
        let mut stmt = conn.prepare("SELECT user, kind, timestamp FROM actions ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut history = Vec::new();
        for row in rows {
            let (user, kind, timestamp) = row?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)?.with_timezone(&Utc);
            history.push(RecruitmentAction { user, kind: ActionKind::from(kind), timestamp });
        }
        Ok(history)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn action_history(&self) -> Result<Vec<RecruitmentAction>, Box<dyn std::error::Error>> {
        let actions = self.actions.lock().map_err(|_| "Store lock poisoned")?;
        Ok(actions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_history_keeps_insertion_order() {
        let store = Store::new_in_memory().expect("Failed to create store");

        store.record_action(&RecruitmentAction::new("p2", ActionKind::Favorite)).unwrap();
        store.record_action(&RecruitmentAction::new("p1", ActionKind::Other("contacted".into()))).unwrap();
        store.record_action(&RecruitmentAction::new("p1", ActionKind::Favorite)).unwrap();

        let history = store.action_history().expect("Failed to read history");
        let users: Vec<_> = history.iter().map(|a| (a.user.as_str(), a.kind.as_str())).collect();
        assert_eq!(users, vec![("p2", "favorite"), ("p1", "contacted"), ("p1", "favorite")]);
    }

    #[test]
    fn test_remove_only_matching_actions() {
        let store = Store::new_in_memory().unwrap();
        store.record_action(&RecruitmentAction::new("p1", ActionKind::Favorite)).unwrap();
        store.record_action(&RecruitmentAction::new("p1", ActionKind::Favorite)).unwrap();
        store.record_action(&RecruitmentAction::new("p1", ActionKind::Other("contacted".into()))).unwrap();
        store.record_action(&RecruitmentAction::new("p2", ActionKind::Favorite)).unwrap();

        let removed = store.remove_actions("p1", &ActionKind::Favorite).unwrap();
        assert_eq!(removed, 2);

        let history = store.action_history().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|a| !(a.user == "p1" && a.kind == ActionKind::Favorite)));
    }

    #[test]
    fn test_history_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recruitment.db");

        {
            let store = Store::new(&path).expect("Failed to open store");
            store.record_action(&RecruitmentAction::new("p1", ActionKind::Favorite)).unwrap();
        }

        let store = Store::new(&path).expect("Failed to reopen store");
        let history = store.action_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user, "p1");
        assert_eq!(history[0].kind, ActionKind::Favorite);
    }
}
