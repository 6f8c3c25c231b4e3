use actix_cors::Cors;
use actix_web::{App, HttpServer};
use listing::api::app::create_app;
use listing::infra;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let pool = infra::db::pg().await;

    let port = env::var_os("HTTP_PORT")
        .map(|val| {
            val.to_str()
                .expect("invalid port")
                .to_string()
                .parse::<u16>()
                .expect("invalid port")
        })
        .unwrap_or(8080);

    let secret_key: &'static str = Box::leak(
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| "secret".to_string())
            .into_boxed_str(),
    );

    log::info!(port = port; "Start server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
                actix_web::http::header::AUTHORIZATION,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .configure(create_app(pool.clone(), secret_key))
            .wrap(cors)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
