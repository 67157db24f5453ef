//! User dataset repository.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::info;

use househub_core::result::AppResult;
use househub_entity::user::{User, UserId};

use crate::json_file::JsonFile;

/// Repository over `users.json`.
///
/// Reads are lock-free. Every read-modify-write cycle holds `write_lock`
/// for its whole duration, so two writers can never interleave and a
/// check made inside the cycle (such as email uniqueness) still holds
/// when the document is written.
#[derive(Debug)]
pub struct UserRepository {
    /// Backing document.
    file: JsonFile,
    /// Serializes writers.
    write_lock: Mutex<()>,
}

impl UserRepository {
    /// Creates a repository over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    /// Loads every user. A missing dataset is an empty one.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.file.read_or_default().await
    }

    /// Finds a user by email, ignoring case.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.find_all().await?;
        Ok(users.into_iter().find(|u| u.email_matches(email)))
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.find_all().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Appends the user produced by `build` inside one serialized write cycle.
    ///
    /// `build` sees the current users and may reject the insert by
    /// returning an error, in which case nothing is written.
    pub async fn create_with<F>(&self, build: F) -> AppResult<User>
    where
        F: FnOnce(&[User]) -> AppResult<User>,
    {
        let _guard = self.write_lock.lock().await;

        let mut users = self.find_all().await?;
        let user = build(&users)?;
        users.push(user.clone());
        self.file.write(&users).await?;

        info!(user_id = user.id, total = users.len(), "User created");
        Ok(user)
    }

    /// Applies `update` to every user inside one serialized write cycle.
    ///
    /// `update` returns whether it changed the record; the dataset is only
    /// rewritten when at least one record changed. Returns the change count.
    pub async fn update_each<F>(&self, mut update: F) -> AppResult<usize>
    where
        F: FnMut(&mut User) -> bool,
    {
        let _guard = self.write_lock.lock().await;

        let mut users = self.find_all().await?;
        let mut changed = 0;
        for user in users.iter_mut() {
            if update(user) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.file.write(&users).await?;
        }
        Ok(changed)
    }

    /// The ID the next created user receives: highest existing ID plus one.
    pub fn next_id(users: &[User]) -> UserId {
        users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}
