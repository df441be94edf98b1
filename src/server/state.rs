//! Shared server state: the in-memory user store and the estimation cache.

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{Estimation, User};

/// In-memory user collection.
///
/// Pure synchronous container so CRUD semantics are testable without a
/// runtime; `AppState` wraps it in a lock for concurrent handlers.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

/// Why a user mutation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreError {
    /// Name or email missing/empty on create.
    MissingFields,
    /// No user with the requested id.
    NotFound,
}

impl UserStore {
    /// Store seeded with the two demo rows every fresh server starts with.
    pub fn with_demo_users() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "Ana García".to_string(),
                    email: "ana@example.com".to_string(),
                    created_at: None,
                    updated_at: None,
                },
                User {
                    id: 2,
                    name: "Carlos López".to_string(),
                    email: "carlos@example.com".to_string(),
                    created_at: None,
                    updated_at: None,
                },
            ],
        }
    }

    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Create a user. Ids are `max + 1` so deletes never cause id reuse.
    pub fn create(&mut self, name: &str, email: &str) -> Result<User, UserStoreError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(UserStoreError::MissingFields);
        }

        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Partial update: absent fields keep their current values.
    pub fn update(
        &mut self,
        id: u64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, UserStoreError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserStoreError::NotFound)?;

        if let Some(name) = name.map(str::trim).filter(|s| !s.is_empty()) {
            user.name = name.to_string();
        }
        if let Some(email) = email.map(str::trim).filter(|s| !s.is_empty()) {
            user.email = email.to_string();
        }
        user.updated_at = Some(Utc::now());
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<User, UserStoreError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserStoreError::NotFound)?;
        Ok(self.users.remove(index))
    }
}

/// State shared by all request handlers.
pub struct AppState {
    pub users: RwLock<UserStore>,
    /// Benchmark records served by `/api/v1/estimations/basic`, computed on
    /// first request and reused afterwards.
    pub estimations: RwLock<Option<Vec<Estimation>>>,
    /// Per-algorithm wall-clock budget for server-side benchmarks.
    pub time_limit: f64,
    /// Base seed for the probability estimators.
    pub seed: u64,
}

impl AppState {
    pub fn new(time_limit: f64, seed: u64) -> Self {
        Self {
            users: RwLock::new(UserStore::with_demo_users()),
            estimations: RwLock::new(None),
            time_limit,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_starts_with_two_users() {
        let store = UserStore::with_demo_users();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "Ana García");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn create_validates_and_stamps() {
        let mut store = UserStore::with_demo_users();
        assert_eq!(store.create("", "x@example.com"), Err(UserStoreError::MissingFields));
        assert_eq!(store.create("  ", "x@example.com"), Err(UserStoreError::MissingFields));
        assert_eq!(store.create("X", ""), Err(UserStoreError::MissingFields));

        let user = store.create("Diana", "diana@example.com").unwrap();
        assert_eq!(user.id, 3);
        assert!(user.created_at.is_some());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = UserStore::with_demo_users();
        let created = store.create("Diana", "diana@example.com").unwrap();
        store.delete(1).unwrap();
        let next = store.create("Elena", "elena@example.com").unwrap();
        assert!(next.id > created.id);
    }

    #[test]
    fn update_is_partial_and_stamps() {
        let mut store = UserStore::with_demo_users();
        let updated = store.update(2, Some("Carlos M. López"), None).unwrap();
        assert_eq!(updated.name, "Carlos M. López");
        assert_eq!(updated.email, "carlos@example.com");
        assert!(updated.updated_at.is_some());

        assert_eq!(store.update(99, Some("X"), None), Err(UserStoreError::NotFound));
    }

    #[test]
    fn delete_returns_the_removed_user() {
        let mut store = UserStore::with_demo_users();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.name, "Carlos López");
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete(2), Err(UserStoreError::NotFound));
    }
}
