use crate::domain::model::{HotelFilter, HotelWithRooms};
use crate::domain::repository::HotelRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Read-only hotel search. No authentication, zero matches is an empty
/// vec, never an error.
pub struct QueryService {
    hotels: Arc<dyn HotelRepository>,
}

impl QueryService {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> QueryService {
        QueryService { hotels }
    }

    pub async fn search(&self, filter: &HotelFilter) -> anyhow::Result<Vec<HotelWithRooms>> {
        self.hotels.find_all(filter).await
    }

    pub async fn find(&self, id: Uuid) -> anyhow::Result<Option<HotelWithRooms>> {
        self.hotels.find(id).await
    }
}
