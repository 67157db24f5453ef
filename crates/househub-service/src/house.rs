//! House listing.

use std::sync::Arc;

use househub_core::result::AppResult;
use househub_entity::house::House;
use househub_storage::repositories::HouseRepository;

/// Serves the house list.
#[derive(Debug, Clone)]
pub struct HouseService {
    houses: Arc<HouseRepository>,
}

impl HouseService {
    pub fn new(houses: Arc<HouseRepository>) -> Self {
        Self { houses }
    }

    /// Every house as stored.
    pub async fn list(&self) -> AppResult<Vec<House>> {
        self.houses.find_all().await
    }
}
