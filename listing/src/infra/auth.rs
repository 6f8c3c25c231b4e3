use actix_web::http::header;
use actix_web::HttpRequest;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Resolves the caller identity from the Authorization header. A
/// missing or invalid token resolves to no identity, the services
/// decide what that means per operation.
pub struct JwtManager {
    secret_key: String,
    decoding_key: DecodingKey,
}

const JWT_TTL: i64 = 60 * 60;

impl JwtManager {
    pub fn new(secret_key: String) -> JwtManager {
        let decoding_key = DecodingKey::from_secret(secret_key.as_ref());

        JwtManager {
            secret_key,
            decoding_key,
        }
    }

    pub fn gen_token(&self, user_id: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                sub: user_id.to_string(),
                exp: chrono::Utc::now().timestamp() + JWT_TTL,
            },
            &EncodingKey::from_secret(self.secret_key.as_ref()),
        )
        .unwrap()
    }

    pub fn identity(&self, req: &HttpRequest) -> Option<String> {
        let auth_header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
        let token = auth_header.trim_start_matches("Bearer").trim();

        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .ok()
            .map(|t| t.claims.sub)
    }
}
