use crate::domain::model::{NewHotel, NewRoom};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} must be atleast {min} characters long")]
    TooShort { field: &'static str, min: usize },
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be atleast {min}")]
    BelowMinimum { field: &'static str, min: i32 },
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), FormError> {
    if value.chars().count() < min {
        return Err(FormError::TooShort { field, min });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(())
}

fn at_least(field: &'static str, value: i32, min: i32) -> Result<(), FormError> {
    if value < min {
        return Err(FormError::BelowMinimum { field, min });
    }
    Ok(())
}

/// Field values of the hotel form. Validation rules mirror the hosted
/// form: it reports the first violation in field order.
#[derive(Debug, Clone, Default)]
pub struct HotelForm {
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
}

impl HotelForm {
    pub fn validate(&self) -> Result<(), FormError> {
        min_len("title", &self.title, 3)?;
        min_len("description", &self.description, 10)?;
        required("image", &self.image)?;
        required("country", &self.country)?;
        min_len("locationDescription", &self.location_description, 10)?;
        Ok(())
    }

    pub fn body(&self) -> NewHotel {
        NewHotel {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            country: self.country.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            location_description: self.location_description.clone(),
            gym: self.gym,
            spa: self.spa,
            bar: self.bar,
            laundry: self.laundry,
            restaurant: self.restaurant,
            shopping: self.shopping,
            free_parking: self.free_parking,
            bike_rental: self.bike_rental,
            free_wifi: self.free_wifi,
            movie_nights: self.movie_nights,
            swimming_pool: self.swimming_pool,
            coffee_shop: self.coffee_shop,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomForm {
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

impl RoomForm {
    pub fn validate(&self) -> Result<(), FormError> {
        min_len("title", &self.title, 3)?;
        min_len("description", &self.description, 10)?;
        at_least("bedCount", self.bed_count, 1)?;
        at_least("guestCount", self.guest_count, 1)?;
        at_least("bathroomCount", self.bathroom_count, 1)?;
        at_least("kingBed", self.king_bed, 0)?;
        at_least("queenBed", self.queen_bed, 0)?;
        required("image", &self.image)?;
        if let Some(price) = self.break_fast_price {
            at_least("breakFastPrice", price, 0)?;
        }
        at_least("roomPrice", self.room_price, 1)?;
        Ok(())
    }

    pub fn body(&self, hotel_id: Uuid) -> NewRoom {
        NewRoom {
            hotel_id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            bed_count: self.bed_count,
            guest_count: self.guest_count,
            bathroom_count: self.bathroom_count,
            king_bed: self.king_bed,
            queen_bed: self.queen_bed,
            room_price: self.room_price,
            break_fast_price: self.break_fast_price,
            room_service: self.room_service,
            tv: self.tv,
            balcony: self.balcony,
            free_wifi: self.free_wifi,
            city_view: self.city_view,
            ocean_view: self.ocean_view,
            forest_view: self.forest_view,
            mountain_view: self.mountain_view,
            air_condition: self.air_condition,
            sound_proofed: self.sound_proofed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_hotel_form() -> HotelForm {
        HotelForm {
            title: "Beach Hotel".to_string(),
            description: "Ten chars or more".to_string(),
            image: "https://img.example/u1".to_string(),
            country: "US".to_string(),
            location_description: "Right on the boardwalk".to_string(),
            ..HotelForm::default()
        }
    }

    fn valid_room_form() -> RoomForm {
        RoomForm {
            title: "Sea view double".to_string(),
            description: "Ten chars or more".to_string(),
            image: "https://img.example/r1".to_string(),
            bed_count: 2,
            guest_count: 2,
            bathroom_count: 1,
            room_price: 120,
            ..RoomForm::default()
        }
    }

    #[test]
    fn valid_forms_pass() {
        assert_eq!(valid_hotel_form().validate(), Ok(()));
        assert_eq!(valid_room_form().validate(), Ok(()));
    }

    #[test]
    fn hotel_title_needs_three_characters() {
        let mut form = valid_hotel_form();
        form.title = "Be".to_string();
        assert_eq!(
            form.validate(),
            Err(FormError::TooShort {
                field: "title",
                min: 3
            })
        );
    }

    #[test]
    fn hotel_image_and_country_are_required() {
        let mut form = valid_hotel_form();
        form.image.clear();
        assert_eq!(form.validate(), Err(FormError::Required("image")));

        let mut form = valid_hotel_form();
        form.country.clear();
        assert_eq!(form.validate(), Err(FormError::Required("country")));
    }

    #[test]
    fn hotel_location_description_needs_ten_characters() {
        let mut form = valid_hotel_form();
        form.location_description = "short".to_string();
        assert_eq!(
            form.validate(),
            Err(FormError::TooShort {
                field: "locationDescription",
                min: 10
            })
        );
    }

    #[test]
    fn room_counts_and_price_have_minimums() {
        let mut form = valid_room_form();
        form.bed_count = 0;
        assert_eq!(
            form.validate(),
            Err(FormError::BelowMinimum {
                field: "bedCount",
                min: 1
            })
        );

        let mut form = valid_room_form();
        form.room_price = 0;
        assert_eq!(
            form.validate(),
            Err(FormError::BelowMinimum {
                field: "roomPrice",
                min: 1
            })
        );

        let mut form = valid_room_form();
        form.king_bed = -1;
        assert_eq!(
            form.validate(),
            Err(FormError::BelowMinimum {
                field: "kingBed",
                min: 0
            })
        );
    }

    #[test]
    fn room_breakfast_price_is_optional_but_non_negative() {
        let mut form = valid_room_form();
        form.break_fast_price = None;
        assert_eq!(form.validate(), Ok(()));

        form.break_fast_price = Some(-5);
        assert_eq!(
            form.validate(),
            Err(FormError::BelowMinimum {
                field: "breakFastPrice",
                min: 0
            })
        );
    }
}
