#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::header::ContentType;
    use actix_web::{test, App};
    use listing::api::app::create_app;
    use listing::infra::auth::JwtManager;
    use listing::infra::db;
    use serde_json::{json, Value};
    use sqlx::{Executor, Row};

    const SECRET_KEY: &str = "53b65289550252052c61406f0f3dad24";

    fn bearer(user_id: &str) -> (actix_web::http::header::HeaderName, String) {
        let jwt = JwtManager::new(SECRET_KEY.to_string());
        (
            actix_web::http::header::AUTHORIZATION,
            format!("Bearer {}", jwt.gen_token(user_id)),
        )
    }

    fn hotel_body(title: &str, country: &str) -> Value {
        json!({
            "title": title,
            "description": "A description of ten or more characters",
            "image": "https://utfs.io/f/u1.png",
            "country": country,
            "state": "CA",
            "city": "San Diego",
            "locationDescription": "Right on the boardwalk",
            "freeWifi": true
        })
    }

    fn room_body(hotel_id: &str, title: &str) -> Value {
        json!({
            "hotelId": hotel_id,
            "title": title,
            "description": "A description of ten or more characters",
            "image": "https://utfs.io/f/r1.png",
            "bedCount": 2,
            "guestCount": 2,
            "bathroomCount": 1,
            "queenBed": 1,
            "roomPrice": 120,
            "breakFastPrice": 15,
            "TV": true,
            "oceanView": true
        })
    }

    async fn json_of(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&body).expect("Failed to parse json")
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404() {
        let pool = db::pg().await;
        let app =
            test::init_service(App::new().configure(create_app(pool.clone(), SECRET_KEY))).await;

        let req = test::TestRequest::post().uri("/nothing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    // One long scenario rather than one test per case: the tests share a
    // database and the runner executes test fns in parallel.
    #[actix_web::test]
    async fn test_listing_crud_and_search() {
        let pool = db::pg().await;
        pool.execute(include_str!("../schema.sql")).await.unwrap();
        pool.execute("TRUNCATE hotels CASCADE").await.unwrap();

        let app =
            test::init_service(App::new().configure(create_app(pool.clone(), SECRET_KEY))).await;

        // mutations without a token are rejected and write nothing
        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .set_payload(hotel_body("Beach Hotel", "US").to_string())
            .uri("/hotel")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);

        let row = sqlx::query("SELECT count(*) FROM hotels")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>(0), 0);

        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .set_payload(room_body("0a0a0a0a-0a0a-0a0a-0a0a-0a0a0a0a0a0a", "Double").to_string())
            .uri("/room")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);

        // create stamps the caller as owner
        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_1"))
            .set_payload(hotel_body("Beach Hotel", "US").to_string())
            .uri("/hotel")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let hotel = json_of(resp).await;
        let id = hotel["id"].as_str().unwrap().to_string();
        assert_eq!(hotel["userId"], "owner_1");
        assert_eq!(hotel["title"], "Beach Hotel");
        assert_eq!(hotel["freeWifi"], true);

        // fetch round-trip: same fields, no rooms yet
        let req = test::TestRequest::get()
            .uri(&format!("/hotel/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let fetched = json_of(resp).await;
        assert_eq!(fetched["title"], "Beach Hotel");
        assert_eq!(fetched["country"], "US");
        assert_eq!(fetched["locationDescription"], "Right on the boardwalk");
        assert_eq!(fetched["rooms"], json!([]));

        // partial update keeps the other fields
        let req = test::TestRequest::patch()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_1"))
            .set_payload(json!({"title": "Beach Hotel 2"}).to_string())
            .uri(&format!("/hotel/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let updated = json_of(resp).await;
        assert_eq!(updated["title"], "Beach Hotel 2");
        assert_eq!(updated["description"], hotel["description"]);
        assert_eq!(updated["city"], "San Diego");

        // add two rooms, they come back nested under the hotel
        for title in ["Sea view double", "Garden single"] {
            let req = test::TestRequest::post()
                .insert_header(ContentType::json())
                .insert_header(bearer("owner_1"))
                .set_payload(room_body(&id, title).to_string())
                .uri("/room")
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);
        }
        let req = test::TestRequest::get()
            .uri(&format!("/hotel/{}", id))
            .to_request();
        let fetched = json_of(test::call_service(&app, req).await).await;
        assert_eq!(fetched["rooms"].as_array().unwrap().len(), 2);
        assert_eq!(fetched["rooms"][0]["TV"], true);

        // room update is partial too
        let room_id = fetched["rooms"][0]["id"].as_str().unwrap().to_string();
        let req = test::TestRequest::patch()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_1"))
            .set_payload(json!({"roomPrice": 150, "balcony": true}).to_string())
            .uri(&format!("/room/{}", room_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let room = json_of(resp).await;
        assert_eq!(room["roomPrice"], 150);
        assert_eq!(room["balcony"], true);
        assert_eq!(room["bedCount"], 2);
        assert_eq!(room["breakFastPrice"], 15);

        // room delete
        let req = test::TestRequest::delete()
            .insert_header(bearer("owner_1"))
            .uri(&format!("/room/{}", room_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        // unparsable id counts as missing
        let req = test::TestRequest::patch()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_1"))
            .set_payload(json!({"title": "x"}).to_string())
            .uri("/hotel/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        // unknown id surfaces as the opaque internal error
        let req = test::TestRequest::patch()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_1"))
            .set_payload(json!({"title": "x"}).to_string())
            .uri("/hotel/0a0a0a0a-0a0a-0a0a-0a0a-0a0a0a0a0a0a")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(std::str::from_utf8(&body).unwrap(), "Internal server error");

        // second hotel for the search cases
        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .insert_header(bearer("owner_2"))
            .set_payload(hotel_body("Mountain Lodge", "CA").to_string())
            .uri("/hotel")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        // substring title match
        let req = test::TestRequest::get().uri("/?title=each").to_request();
        let found = json_of(test::call_service(&app, req).await).await;
        let found = found.as_array().unwrap().clone();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "Beach Hotel 2");
        assert_eq!(found[0]["rooms"].as_array().unwrap().len(), 1);

        // title contains is case sensitive
        let req = test::TestRequest::get().uri("/?title=BEACH").to_request();
        let found = json_of(test::call_service(&app, req).await).await;
        assert_eq!(found, json!([]));

        // exact country match
        let req = test::TestRequest::get().uri("/?country=CA").to_request();
        let found = json_of(test::call_service(&app, req).await).await;
        let found = found.as_array().unwrap().clone();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "Mountain Lodge");

        // empty params impose no constraint
        let req = test::TestRequest::get()
            .uri("/?title=&country=&state=&city=")
            .to_request();
        let found = json_of(test::call_service(&app, req).await).await;
        assert_eq!(found.as_array().unwrap().len(), 2);

        // no match is an empty list, not an error
        let req = test::TestRequest::get()
            .uri("/?title=Nonexistent")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let found = json_of(resp).await;
        assert_eq!(found, json!([]));

        // hotel delete cascades to its rooms
        let req = test::TestRequest::delete()
            .insert_header(bearer("owner_1"))
            .uri(&format!("/hotel/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/hotel/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let row = sqlx::query("SELECT count(*) FROM rooms WHERE hotel_id = $1::uuid")
            .bind(&id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>(0), 0);
    }
}
