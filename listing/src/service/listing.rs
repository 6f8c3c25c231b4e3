use crate::domain::model::{Hotel, HotelPatch, NewHotel, NewRoom, Room, RoomPatch};
use crate::domain::repository::{HotelRepository, RoomRepository};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("unauthorized")]
    Unauthenticated,
    #[error("{0} is required")]
    MissingId(&'static str),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Mutating surface over hotel and room listings. Every operation
/// requires an authenticated identity. Ownership of a hotel is stamped
/// on create and not re-checked on update/delete, a known gap (see
/// DESIGN.md).
pub struct ListingService {
    hotels: Arc<dyn HotelRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl ListingService {
    pub fn new(hotels: Arc<dyn HotelRepository>, rooms: Arc<dyn RoomRepository>) -> ListingService {
        ListingService { hotels, rooms }
    }

    pub async fn create_hotel(
        &self,
        identity: Option<&str>,
        body: NewHotel,
    ) -> Result<Hotel, ListingError> {
        let owner = identity.ok_or(ListingError::Unauthenticated)?;
        Ok(self.hotels.create(body, owner.to_string()).await?)
    }

    pub async fn update_hotel(
        &self,
        identity: Option<&str>,
        id: Option<Uuid>,
        patch: HotelPatch,
    ) -> Result<Hotel, ListingError> {
        identity.ok_or(ListingError::Unauthenticated)?;
        let id = id.ok_or(ListingError::MissingId("hotel id"))?;
        self.hotels
            .update(id, patch)
            .await?
            .ok_or(ListingError::NotFound)
    }

    pub async fn delete_hotel(
        &self,
        identity: Option<&str>,
        id: Option<Uuid>,
    ) -> Result<Hotel, ListingError> {
        identity.ok_or(ListingError::Unauthenticated)?;
        let id = id.ok_or(ListingError::MissingId("hotel id"))?;
        self.hotels.delete(id).await?.ok_or(ListingError::NotFound)
    }

    pub async fn create_room(
        &self,
        identity: Option<&str>,
        body: NewRoom,
    ) -> Result<Room, ListingError> {
        identity.ok_or(ListingError::Unauthenticated)?;
        Ok(self.rooms.create(body).await?)
    }

    pub async fn update_room(
        &self,
        identity: Option<&str>,
        id: Option<Uuid>,
        patch: RoomPatch,
    ) -> Result<Room, ListingError> {
        identity.ok_or(ListingError::Unauthenticated)?;
        let id = id.ok_or(ListingError::MissingId("room id"))?;
        self.rooms
            .update(id, patch)
            .await?
            .ok_or(ListingError::NotFound)
    }

    pub async fn delete_room(
        &self,
        identity: Option<&str>,
        id: Option<Uuid>,
    ) -> Result<Room, ListingError> {
        identity.ok_or(ListingError::Unauthenticated)?;
        let id = id.ok_or(ListingError::MissingId("room id"))?;
        self.rooms.delete(id).await?.ok_or(ListingError::NotFound)
    }
}
