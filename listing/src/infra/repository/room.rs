use crate::domain::model::{NewRoom, Room, RoomPatch};
use crate::domain::repository;
use async_trait::async_trait;
use sqlx::Error::RowNotFound;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgRoomRepository {
    pub pool: Pool<Postgres>,
}

const INSERT_ROOM: &str = "INSERT INTO rooms(id, hotel_id, title, description, image, bed_count, guest_count, \
     bathroom_count, king_bed, queen_bed, room_price, break_fast_price, room_service, tv, \
     balcony, free_wifi, city_view, ocean_view, forest_view, mountain_view, air_condition, \
     sound_proofed) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)";

const UPDATE_ROOM: &str = "UPDATE rooms SET title = $2, description = $3, image = $4, bed_count = $5, \
     guest_count = $6, bathroom_count = $7, king_bed = $8, queen_bed = $9, room_price = $10, \
     break_fast_price = $11, room_service = $12, tv = $13, balcony = $14, free_wifi = $15, \
     city_view = $16, ocean_view = $17, forest_view = $18, mountain_view = $19, \
     air_condition = $20, sound_proofed = $21 WHERE id = $1";

impl PgRoomRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgRoomRepository { pool }
    }

    async fn fetch_room(&self, id: Uuid) -> anyhow::Result<Option<Room>> {
        let row = sqlx::query("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await;
        match row {
            Ok(row) => Ok(Some(row.into())),
            Err(RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl repository::RoomRepository for PgRoomRepository {
    async fn find_by_hotel(&self, hotel_id: Uuid) -> anyhow::Result<Vec<Room>> {
        let rows = sqlx::query("SELECT * FROM rooms WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn create(&self, room: NewRoom) -> anyhow::Result<Room> {
        let room = Room {
            id: Uuid::new_v4(),
            hotel_id: room.hotel_id,
            title: room.title,
            description: room.description,
            image: room.image,
            bed_count: room.bed_count,
            guest_count: room.guest_count,
            bathroom_count: room.bathroom_count,
            king_bed: room.king_bed,
            queen_bed: room.queen_bed,
            room_price: room.room_price,
            break_fast_price: room.break_fast_price,
            room_service: room.room_service,
            tv: room.tv,
            balcony: room.balcony,
            free_wifi: room.free_wifi,
            city_view: room.city_view,
            ocean_view: room.ocean_view,
            forest_view: room.forest_view,
            mountain_view: room.mountain_view,
            air_condition: room.air_condition,
            sound_proofed: room.sound_proofed,
        };

        sqlx::query(INSERT_ROOM)
            .bind(room.id)
            .bind(room.hotel_id)
            .bind(&room.title)
            .bind(&room.description)
            .bind(&room.image)
            .bind(room.bed_count)
            .bind(room.guest_count)
            .bind(room.bathroom_count)
            .bind(room.king_bed)
            .bind(room.queen_bed)
            .bind(room.room_price)
            .bind(room.break_fast_price)
            .bind(room.room_service)
            .bind(room.tv)
            .bind(room.balcony)
            .bind(room.free_wifi)
            .bind(room.city_view)
            .bind(room.ocean_view)
            .bind(room.forest_view)
            .bind(room.mountain_view)
            .bind(room.air_condition)
            .bind(room.sound_proofed)
            .execute(&self.pool)
            .await?;

        Ok(room)
    }

    async fn update(&self, id: Uuid, patch: RoomPatch) -> anyhow::Result<Option<Room>> {
        let mut room = match self.fetch_room(id).await? {
            Some(room) => room,
            None => return Ok(None),
        };
        patch.apply(&mut room);

        sqlx::query(UPDATE_ROOM)
            .bind(room.id)
            .bind(&room.title)
            .bind(&room.description)
            .bind(&room.image)
            .bind(room.bed_count)
            .bind(room.guest_count)
            .bind(room.bathroom_count)
            .bind(room.king_bed)
            .bind(room.queen_bed)
            .bind(room.room_price)
            .bind(room.break_fast_price)
            .bind(room.room_service)
            .bind(room.tv)
            .bind(room.balcony)
            .bind(room.free_wifi)
            .bind(room.city_view)
            .bind(room.ocean_view)
            .bind(room.forest_view)
            .bind(room.mountain_view)
            .bind(room.air_condition)
            .bind(room.sound_proofed)
            .execute(&self.pool)
            .await?;

        Ok(Some(room))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Room>> {
        let row = sqlx::query("DELETE FROM rooms WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_one(&self.pool)
            .await;
        match row {
            Ok(row) => Ok(Some(row.into())),
            Err(RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
