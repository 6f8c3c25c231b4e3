use crate::domain::model::{HotelFilter, HotelPatch, NewHotel, NewRoom, RoomPatch};
use crate::infra::auth::JwtManager;
use crate::service::listing::{ListingError, ListingService};
use crate::service::query::QueryService;
use actix_web::{delete, get, patch, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

fn listing_error(err: ListingError, route: &str) -> HttpResponse {
    match err {
        ListingError::Unauthenticated => HttpResponse::Unauthorized().body("Unauthorized"),
        ListingError::MissingId(field) => {
            HttpResponse::BadRequest().body(format!("{} is required", field))
        }
        // NotFound is deliberately not distinguished on the wire.
        err => {
            log::error!(route = route, err:? = err; "request failed");
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}

#[post("/hotel")]
async fn create_hotel(
    req: HttpRequest,
    req_body: String,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let body = match serde_json::from_str::<NewHotel>(req_body.as_str()) {
        Ok(body) => body,
        Err(err) => return HttpResponse::BadRequest().body(format!("err: {:?}", err)),
    };

    match listing.create_hotel(identity.as_deref(), body).await {
        Ok(hotel) => HttpResponse::Ok().json(hotel),
        Err(err) => listing_error(err, "POST /hotel"),
    }
}

#[patch("/hotel/{hotelId}")]
async fn update_hotel(
    req: HttpRequest,
    path: web::Path<String>,
    req_body: String,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let id = Uuid::parse_str(path.as_str()).ok();
    let patch = match serde_json::from_str::<HotelPatch>(req_body.as_str()) {
        Ok(patch) => patch,
        Err(err) => return HttpResponse::BadRequest().body(format!("err: {:?}", err)),
    };

    match listing.update_hotel(identity.as_deref(), id, patch).await {
        Ok(hotel) => HttpResponse::Ok().json(hotel),
        Err(err) => listing_error(err, "PATCH /hotel"),
    }
}

#[delete("/hotel/{hotelId}")]
async fn delete_hotel(
    req: HttpRequest,
    path: web::Path<String>,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let id = Uuid::parse_str(path.as_str()).ok();

    match listing.delete_hotel(identity.as_deref(), id).await {
        Ok(hotel) => HttpResponse::Ok().json(hotel),
        Err(err) => listing_error(err, "DELETE /hotel"),
    }
}

#[get("/hotel/{hotelId}")]
async fn get_hotel(path: web::Path<String>, query: web::Data<QueryService>) -> impl Responder {
    let id = match Uuid::parse_str(path.as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().body("hotel not found"),
    };

    match query.find(id).await {
        Ok(Some(hotel)) => HttpResponse::Ok().json(hotel),
        Ok(None) => HttpResponse::NotFound().body("hotel not found"),
        Err(err) => {
            log::error!(route = "GET /hotel", err:? = err; "request failed");
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}

#[post("/room")]
async fn create_room(
    req: HttpRequest,
    req_body: String,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let body = match serde_json::from_str::<NewRoom>(req_body.as_str()) {
        Ok(body) => body,
        Err(err) => return HttpResponse::BadRequest().body(format!("err: {:?}", err)),
    };

    match listing.create_room(identity.as_deref(), body).await {
        Ok(room) => HttpResponse::Ok().json(room),
        Err(err) => listing_error(err, "POST /room"),
    }
}

#[patch("/room/{roomId}")]
async fn update_room(
    req: HttpRequest,
    path: web::Path<String>,
    req_body: String,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let id = Uuid::parse_str(path.as_str()).ok();
    let patch = match serde_json::from_str::<RoomPatch>(req_body.as_str()) {
        Ok(patch) => patch,
        Err(err) => return HttpResponse::BadRequest().body(format!("err: {:?}", err)),
    };

    match listing.update_room(identity.as_deref(), id, patch).await {
        Ok(room) => HttpResponse::Ok().json(room),
        Err(err) => listing_error(err, "PATCH /room"),
    }
}

#[delete("/room/{roomId}")]
async fn delete_room(
    req: HttpRequest,
    path: web::Path<String>,
    listing: web::Data<ListingService>,
    jwt: web::Data<JwtManager>,
) -> impl Responder {
    let identity = jwt.identity(&req);
    let id = Uuid::parse_str(path.as_str()).ok();

    match listing.delete_room(identity.as_deref(), id).await {
        Ok(room) => HttpResponse::Ok().json(room),
        Err(err) => listing_error(err, "DELETE /room"),
    }
}

#[get("/")]
async fn search_hotels(
    filter: web::Query<HotelFilter>,
    query: web::Data<QueryService>,
) -> impl Responder {
    match query.search(&filter.into_inner()).await {
        Ok(hotels) => HttpResponse::Ok().json(hotels),
        Err(err) => {
            log::error!(route = "GET /", err:? = err; "request failed");
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}
