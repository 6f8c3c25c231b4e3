use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

/// A hotel listing. Wire names are camelCase to match the original
/// JS client of this API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub location_description: String,
    pub gym: bool,
    pub spa: bool,
    pub bar: bool,
    pub laundry: bool,
    pub restaurant: bool,
    pub shopping: bool,
    pub free_parking: bool,
    pub bike_rental: bool,
    pub free_wifi: bool,
    pub movie_nights: bool,
    pub swimming_pool: bool,
    pub coffee_shop: bool,
    pub added_at: NaiveDateTime,
}

impl From<PgRow> for Hotel {
    fn from(row: PgRow) -> Self {
        Hotel {
            id: row.get("id"),
            user_id: row.get("user_id"),
            title: row.get("title"),
            description: row.get("description"),
            image: row.get("image"),
            country: row.get("country"),
            state: row.get("state"),
            city: row.get("city"),
            location_description: row.get("location_description"),
            gym: row.get("gym"),
            spa: row.get("spa"),
            bar: row.get("bar"),
            laundry: row.get("laundry"),
            restaurant: row.get("restaurant"),
            shopping: row.get("shopping"),
            free_parking: row.get("free_parking"),
            bike_rental: row.get("bike_rental"),
            free_wifi: row.get("free_wifi"),
            movie_nights: row.get("movie_nights"),
            swimming_pool: row.get("swimming_pool"),
            coffee_shop: row.get("coffee_shop"),
            added_at: row.get("added_at"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub bed_count: i32,
    pub guest_count: i32,
    pub bathroom_count: i32,
    pub king_bed: i32,
    pub queen_bed: i32,
    pub room_price: i32,
    pub break_fast_price: Option<i32>,
    pub room_service: bool,
    #[serde(rename = "TV")]
    pub tv: bool,
    pub balcony: bool,
    pub free_wifi: bool,
    pub city_view: bool,
    pub ocean_view: bool,
    pub forest_view: bool,
    pub mountain_view: bool,
    pub air_condition: bool,
    pub sound_proofed: bool,
}

impl From<PgRow> for Room {
    fn from(row: PgRow) -> Self {
        Room {
            id: row.get("id"),
            hotel_id: row.get("hotel_id"),
            title: row.get("title"),
            description: row.get("description"),
            image: row.get("image"),
            bed_count: row.get("bed_count"),
            guest_count: row.get("guest_count"),
            bathroom_count: row.get("bathroom_count"),
            king_bed: row.get("king_bed"),
            queen_bed: row.get("queen_bed"),
            room_price: row.get("room_price"),
            break_fast_price: row.get("break_fast_price"),
            room_service: row.get("room_service"),
            tv: row.get("tv"),
            balcony: row.get("balcony"),
            free_wifi: row.get("free_wifi"),
            city_view: row.get("city_view"),
            ocean_view: row.get("ocean_view"),
            forest_view: row.get("forest_view"),
            mountain_view: row.get("mountain_view"),
            air_condition: row.get("air_condition"),
            sound_proofed: row.get("sound_proofed"),
        }
    }
}

/// A hotel together with its rooms, as returned by the read paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

/// Body of POST /hotel. The owner identity never comes from the body,
/// it is stamped from the auth token by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub title: String,
    pub description: String,
    pub image: String,
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    pub location_description: String,
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub spa: bool,
    #[serde(default)]
    pub bar: bool,
    #[serde(default)]
    pub laundry: bool,
    #[serde(default)]
    pub restaurant: bool,
    #[serde(default)]
    pub shopping: bool,
    #[serde(default)]
    pub free_parking: bool,
    #[serde(default)]
    pub bike_rental: bool,
    #[serde(default)]
    pub free_wifi: bool,
    #[serde(default)]
    pub movie_nights: bool,
    #[serde(default)]
    pub swimming_pool: bool,
    #[serde(default)]
    pub coffee_shop: bool,
}

/// Partial update for PATCH /hotel/{hotelId}. Absent fields keep the
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub location_description: Option<String>,
    pub gym: Option<bool>,
    pub spa: Option<bool>,
    pub bar: Option<bool>,
    pub laundry: Option<bool>,
    pub restaurant: Option<bool>,
    pub shopping: Option<bool>,
    pub free_parking: Option<bool>,
    pub bike_rental: Option<bool>,
    pub free_wifi: Option<bool>,
    pub movie_nights: Option<bool>,
    pub swimming_pool: Option<bool>,
    pub coffee_shop: Option<bool>,
}

impl HotelPatch {
    pub fn apply(self, hotel: &mut Hotel) {
        if let Some(v) = self.title {
            hotel.title = v;
        }
        if let Some(v) = self.description {
            hotel.description = v;
        }
        if let Some(v) = self.image {
            hotel.image = v;
        }
        if let Some(v) = self.country {
            hotel.country = v;
        }
        if let Some(v) = self.state {
            hotel.state = v;
        }
        if let Some(v) = self.city {
            hotel.city = v;
        }
        if let Some(v) = self.location_description {
            hotel.location_description = v;
        }
        if let Some(v) = self.gym {
            hotel.gym = v;
        }
        if let Some(v) = self.spa {
            hotel.spa = v;
        }
        if let Some(v) = self.bar {
            hotel.bar = v;
        }
        if let Some(v) = self.laundry {
            hotel.laundry = v;
        }
        if let Some(v) = self.restaurant {
            hotel.restaurant = v;
        }
        if let Some(v) = self.shopping {
            hotel.shopping = v;
        }
        if let Some(v) = self.free_parking {
            hotel.free_parking = v;
        }
        if let Some(v) = self.bike_rental {
            hotel.bike_rental = v;
        }
        if let Some(v) = self.free_wifi {
            hotel.free_wifi = v;
        }
        if let Some(v) = self.movie_nights {
            hotel.movie_nights = v;
        }
        if let Some(v) = self.swimming_pool {
            hotel.swimming_pool = v;
        }
        if let Some(v) = self.coffee_shop {
            hotel.coffee_shop = v;
        }
    }
}

/// Body of POST /room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub hotel_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub bed_count: i32,
    #[serde(default)]
    pub guest_count: i32,
    #[serde(default)]
    pub bathroom_count: i32,
    #[serde(default)]
    pub king_bed: i32,
    #[serde(default)]
    pub queen_bed: i32,
    pub room_price: i32,
    #[serde(default)]
    pub break_fast_price: Option<i32>,
    #[serde(default)]
    pub room_service: bool,
    #[serde(default, rename = "TV")]
    pub tv: bool,
    #[serde(default)]
    pub balcony: bool,
    #[serde(default)]
    pub free_wifi: bool,
    #[serde(default)]
    pub city_view: bool,
    #[serde(default)]
    pub ocean_view: bool,
    #[serde(default)]
    pub forest_view: bool,
    #[serde(default)]
    pub mountain_view: bool,
    #[serde(default)]
    pub air_condition: bool,
    #[serde(default)]
    pub sound_proofed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub bed_count: Option<i32>,
    pub guest_count: Option<i32>,
    pub bathroom_count: Option<i32>,
    pub king_bed: Option<i32>,
    pub queen_bed: Option<i32>,
    pub room_price: Option<i32>,
    pub break_fast_price: Option<i32>,
    pub room_service: Option<bool>,
    #[serde(rename = "TV")]
    pub tv: Option<bool>,
    pub balcony: Option<bool>,
    pub free_wifi: Option<bool>,
    pub city_view: Option<bool>,
    pub ocean_view: Option<bool>,
    pub forest_view: Option<bool>,
    pub mountain_view: Option<bool>,
    pub air_condition: Option<bool>,
    pub sound_proofed: Option<bool>,
}

impl RoomPatch {
    pub fn apply(self, room: &mut Room) {
        if let Some(v) = self.title {
            room.title = v;
        }
        if let Some(v) = self.description {
            room.description = v;
        }
        if let Some(v) = self.image {
            room.image = v;
        }
        if let Some(v) = self.bed_count {
            room.bed_count = v;
        }
        if let Some(v) = self.guest_count {
            room.guest_count = v;
        }
        if let Some(v) = self.bathroom_count {
            room.bathroom_count = v;
        }
        if let Some(v) = self.king_bed {
            room.king_bed = v;
        }
        if let Some(v) = self.queen_bed {
            room.queen_bed = v;
        }
        if let Some(v) = self.room_price {
            room.room_price = v;
        }
        if let Some(v) = self.break_fast_price {
            room.break_fast_price = Some(v);
        }
        if let Some(v) = self.room_service {
            room.room_service = v;
        }
        if let Some(v) = self.tv {
            room.tv = v;
        }
        if let Some(v) = self.balcony {
            room.balcony = v;
        }
        if let Some(v) = self.free_wifi {
            room.free_wifi = v;
        }
        if let Some(v) = self.city_view {
            room.city_view = v;
        }
        if let Some(v) = self.ocean_view {
            room.ocean_view = v;
        }
        if let Some(v) = self.forest_view {
            room.forest_view = v;
        }
        if let Some(v) = self.mountain_view {
            room.mountain_view = v;
        }
        if let Some(v) = self.air_condition {
            room.air_condition = v;
        }
        if let Some(v) = self.sound_proofed {
            room.sound_proofed = v;
        }
    }
}

/// Search criteria for GET /. Empty strings count as "no constraint",
/// same as an absent parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelFilter {
    pub title: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl HotelFilter {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country)
    }

    pub fn state(&self) -> Option<&str> {
        non_empty(&self.state)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }
}
