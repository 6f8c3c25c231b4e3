use crate::api::routes::{
    create_hotel, create_room, delete_hotel, delete_room, get_hotel, search_hotels, update_hotel,
    update_room,
};
use crate::infra::auth::JwtManager;
use crate::infra::repository::{PgHotelRepository, PgRoomRepository};
use crate::service::listing::ListingService;
use crate::service::query::QueryService;
use actix_web::web;
use actix_web::web::ServiceConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

pub fn create_app(
    pool: Pool<Postgres>,
    secret_key: &'static str,
) -> Box<dyn Fn(&mut ServiceConfig)> {
    let hotel_repo: Arc<PgHotelRepository> = Arc::new(PgHotelRepository::new(pool.clone()));
    let room_repo: Arc<PgRoomRepository> = Arc::new(PgRoomRepository::new(pool.clone()));

    Box::new(move |cfg: &mut ServiceConfig| {
        let jwt_manager = web::Data::new(JwtManager::new(secret_key.to_string()));

        let listing = web::Data::new(ListingService::new(
            Arc::clone(&hotel_repo) as Arc<_>,
            Arc::clone(&room_repo) as Arc<_>,
        ));
        let query = web::Data::new(QueryService::new(Arc::clone(&hotel_repo) as Arc<_>));

        cfg.app_data(jwt_manager)
            .app_data(listing)
            .app_data(query)
            .service(search_hotels)
            .service(get_hotel)
            .service(create_hotel)
            .service(update_hotel)
            .service(delete_hotel)
            .service(create_room)
            .service(update_room)
            .service(delete_room);
    })
}
