use crate::domain::model::{
    Hotel, HotelFilter, HotelPatch, HotelWithRooms, NewHotel, NewRoom, Room, RoomPatch,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Update and delete resolve to `Ok(None)` when the id is unknown,
/// `Err` is reserved for store failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> anyhow::Result<Option<HotelWithRooms>>;
    async fn find_all(&self, filter: &HotelFilter) -> anyhow::Result<Vec<HotelWithRooms>>;
    async fn create(&self, hotel: NewHotel, owner: String) -> anyhow::Result<Hotel>;
    async fn update(&self, id: Uuid, patch: HotelPatch) -> anyhow::Result<Option<Hotel>>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Hotel>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_by_hotel(&self, hotel_id: Uuid) -> anyhow::Result<Vec<Room>>;
    async fn create(&self, room: NewRoom) -> anyhow::Result<Room>;
    async fn update(&self, id: Uuid, patch: RoomPatch) -> anyhow::Result<Option<Room>>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Room>>;
}
