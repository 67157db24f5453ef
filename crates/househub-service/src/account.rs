//! Account operations: signup and profile lookup.

use std::sync::Arc;

use chrono::Utc;
use rand::seq::IndexedRandom;
use tracing::info;

use househub_auth::password::PasswordHasher;
use househub_core::error::AppError;
use househub_core::result::AppResult;
use househub_entity::house::House;
use househub_entity::user::{NewUser, User, UserId, UserProfile};
use househub_storage::repositories::{HouseRepository, UserRepository};

/// Validated signup fields.
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Requested house; ignored unless it names an existing house.
    pub house: Option<String>,
}

/// Handles account creation and profile lookup.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User dataset.
    users: Arc<UserRepository>,
    /// House list.
    houses: Arc<HouseRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<UserRepository>,
        houses: Arc<HouseRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            users,
            houses,
            hasher,
        }
    }

    /// Registers a new user and returns the stored record.
    ///
    /// The duplicate-email check, ID assignment and write happen in one
    /// serialized cycle on the user repository.
    pub async fn signup(&self, input: SignupInput) -> AppResult<User> {
        if input.password != input.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        let password_hash = self.hasher.hash_blocking(input.password).await?;
        let houses = self.houses.find_all().await?;

        let email = input.email;
        let user = self
            .users
            .create_with(move |users| {
                if users.iter().any(|u| u.email_matches(&email)) {
                    return Err(AppError::conflict("Email already registered"));
                }
                let house = choose_house(&houses, input.house.as_deref())?;
                let new_user = NewUser {
                    name: input.name,
                    email,
                    password_hash,
                    house,
                };
                Ok(new_user.into_user(UserRepository::next_id(users), Utc::now()))
            })
            .await?;

        info!(user_id = user.id, house = %user.house(), "User signed up");
        Ok(user)
    }

    /// Loads the sanitized profile of `user_id`.
    pub async fn profile(&self, user_id: UserId) -> AppResult<UserProfile> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

/// The requested house when it exists, otherwise a uniformly random one.
fn choose_house(houses: &[House], requested: Option<&str>) -> AppResult<String> {
    if let Some(house) = requested.and_then(|name| houses.iter().find(|h| h.name == name)) {
        return Ok(house.name.clone());
    }
    houses
        .choose(&mut rand::rng())
        .map(|h| h.name.clone())
        .ok_or_else(|| AppError::internal("No houses available for assignment"))
}
