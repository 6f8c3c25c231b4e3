use crate::domain::model::{Hotel, HotelFilter, HotelPatch, HotelWithRooms, NewHotel, Room};
use crate::domain::repository;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Error::RowNotFound;
use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgHotelRepository {
    pub pool: Pool<Postgres>,
}

const INSERT_HOTEL: &str = "INSERT INTO hotels(id, user_id, title, description, image, country, state, city, \
     location_description, gym, spa, bar, laundry, restaurant, shopping, free_parking, \
     bike_rental, free_wifi, movie_nights, swimming_pool, coffee_shop, added_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)";

const UPDATE_HOTEL: &str = "UPDATE hotels SET title = $2, description = $3, image = $4, country = $5, state = $6, \
     city = $7, location_description = $8, gym = $9, spa = $10, bar = $11, laundry = $12, \
     restaurant = $13, shopping = $14, free_parking = $15, bike_rental = $16, free_wifi = $17, \
     movie_nights = $18, swimming_pool = $19, coffee_shop = $20 WHERE id = $1";

impl PgHotelRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgHotelRepository { pool }
    }

    async fn rooms_of(&self, hotel_ids: &[Uuid]) -> anyhow::Result<HashMap<Uuid, Vec<Room>>> {
        let rows = sqlx::query("SELECT * FROM rooms WHERE hotel_id = ANY($1)")
            .bind(hotel_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut by_hotel: HashMap<Uuid, Vec<Room>> = HashMap::new();
        for row in rows {
            let room = Room::from(row);
            by_hotel.entry(room.hotel_id).or_default().push(room);
        }
        Ok(by_hotel)
    }

    async fn fetch_hotel(&self, id: Uuid) -> anyhow::Result<Option<Hotel>> {
        let row = sqlx::query("SELECT * FROM hotels WHERE id = $1")
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
impl repository::HotelRepository for PgHotelRepository {
    async fn find(&self, id: Uuid) -> anyhow::Result<Option<HotelWithRooms>> {
        let hotel = match self.fetch_hotel(id).await? {
            Some(hotel) => hotel,
            None => return Ok(None),
        };
        let mut rooms = self.rooms_of(&[id]).await?;

        Ok(Some(HotelWithRooms {
            hotel,
            rooms: rooms.remove(&id).unwrap_or_default(),
        }))
    }

    async fn find_all(&self, filter: &HotelFilter) -> anyhow::Result<Vec<HotelWithRooms>> {
        // Title matches as a case-sensitive substring, location fields by
        // equality. Empty or absent fields add no clause at all.
        let mut sql = String::from("SELECT * FROM hotels");
        let mut clauses: Vec<String> = Vec::new();
        let mut values: Vec<&str> = Vec::new();
        if let Some(title) = filter.title() {
            values.push(title);
            clauses.push(format!("title LIKE '%' || ${} || '%'", values.len()));
        }
        if let Some(country) = filter.country() {
            values.push(country);
            clauses.push(format!("country = ${}", values.len()));
        }
        if let Some(state) = filter.state() {
            values.push(state);
            clauses.push(format!("state = ${}", values.len()));
        }
        if let Some(city) = filter.city() {
            values.push(city);
            clauses.push(format!("city = ${}", values.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut query = sqlx::query(&sql);
        for value in &values {
            query = query.bind(*value);
        }
        let hotels: Vec<Hotel> = query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Hotel::from)
            .collect();

        let ids: Vec<Uuid> = hotels.iter().map(|h| h.id).collect();
        let mut rooms = self.rooms_of(&ids).await?;

        Ok(hotels
            .into_iter()
            .map(|hotel| {
                let rooms = rooms.remove(&hotel.id).unwrap_or_default();
                HotelWithRooms { hotel, rooms }
            })
            .collect())
    }

    async fn create(&self, hotel: NewHotel, owner: String) -> anyhow::Result<Hotel> {
        let hotel = Hotel {
            id: Uuid::new_v4(),
            user_id: owner,
            title: hotel.title,
            description: hotel.description,
            image: hotel.image,
            country: hotel.country,
            state: hotel.state,
            city: hotel.city,
            location_description: hotel.location_description,
            gym: hotel.gym,
            spa: hotel.spa,
            bar: hotel.bar,
            laundry: hotel.laundry,
            restaurant: hotel.restaurant,
            shopping: hotel.shopping,
            free_parking: hotel.free_parking,
            bike_rental: hotel.bike_rental,
            free_wifi: hotel.free_wifi,
            movie_nights: hotel.movie_nights,
            swimming_pool: hotel.swimming_pool,
            coffee_shop: hotel.coffee_shop,
            added_at: chrono::Utc::now().naive_utc(),
        };

        sqlx::query(INSERT_HOTEL)
            .bind(hotel.id)
            .bind(&hotel.user_id)
            .bind(&hotel.title)
            .bind(&hotel.description)
            .bind(&hotel.image)
            .bind(&hotel.country)
            .bind(&hotel.state)
            .bind(&hotel.city)
            .bind(&hotel.location_description)
            .bind(hotel.gym)
            .bind(hotel.spa)
            .bind(hotel.bar)
            .bind(hotel.laundry)
            .bind(hotel.restaurant)
            .bind(hotel.shopping)
            .bind(hotel.free_parking)
            .bind(hotel.bike_rental)
            .bind(hotel.free_wifi)
            .bind(hotel.movie_nights)
            .bind(hotel.swimming_pool)
            .bind(hotel.coffee_shop)
            .bind(hotel.added_at)
            .execute(&self.pool)
            .await?;

        Ok(hotel)
    }

    async fn update(&self, id: Uuid, patch: HotelPatch) -> anyhow::Result<Option<Hotel>> {
        // Read-merge-write: last write wins, no version token.
        let mut hotel = match self.fetch_hotel(id).await? {
            Some(hotel) => hotel,
            None => return Ok(None),
        };
        patch.apply(&mut hotel);

        sqlx::query(UPDATE_HOTEL)
            .bind(hotel.id)
            .bind(&hotel.title)
            .bind(&hotel.description)
            .bind(&hotel.image)
            .bind(&hotel.country)
            .bind(&hotel.state)
            .bind(&hotel.city)
            .bind(&hotel.location_description)
            .bind(hotel.gym)
            .bind(hotel.spa)
            .bind(hotel.bar)
            .bind(hotel.laundry)
            .bind(hotel.restaurant)
            .bind(hotel.shopping)
            .bind(hotel.free_parking)
            .bind(hotel.bike_rental)
            .bind(hotel.free_wifi)
            .bind(hotel.movie_nights)
            .bind(hotel.swimming_pool)
            .bind(hotel.coffee_shop)
            .execute(&self.pool)
            .await?;

        Ok(Some(hotel))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Hotel>> {
        // Rooms go with the hotel via ON DELETE CASCADE.
        let row: Result<PgRow, _> = sqlx::query("DELETE FROM hotels WHERE id = $1 RETURNING *")
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
