#![allow(dead_code)]

use bson::oid::ObjectId;
use jwt_auth::test::create_jwt;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TRADETIX_BIND_ADDRESS").unwrap()
}

pub fn url(path: &str) -> String {
    format!("http://{}{path}", address())
}

pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub token: String,
}

///
/// Registers user with unique email and returns his first session
///
pub async fn register_user(client: &Client) -> RegisteredUser {
    let email = format!("{}@tradetix.test", Uuid::new_v4().simple());

    let response = client
        .post(url("/api/v1/users/register"))
        .json(&json!({
            "username": "Test User",
            "email": email,
            "password": "secret password",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.json::<Value>().await.unwrap();

    RegisteredUser {
        id: body["data"]["user"]["id"].as_str().unwrap().to_string(),
        email,
        token: body["data"]["token"].as_str().unwrap().to_string(),
    }
}

///
/// Creates ticket that expires in a day and returns its id
///
pub async fn create_ticket(client: &Client, token: &str, price: i64) -> String {
    let expiry = time::OffsetDateTime::now_utc() + time::Duration::days(1);
    let expiry = expiry
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap();

    let response = client
        .post(url("/api/v1/tickets"))
        .bearer_auth(token)
        .json(&json!({
            "title": "Arijit Singh Concert",
            "description": "Front row",
            "price": price,
            "expiry": expiry,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.json::<Value>().await.unwrap();

    body["data"]["id"].as_str().unwrap().to_string()
}

///
/// Token with valid signature that was never stored as a session
///
pub fn create_unregistered_jwt() -> String {
    let jwt_algorithms = std::env::var("TRADETIX_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("TRADETIX_JWT_ENCODING_KEY").unwrap();

    create_jwt(ObjectId::new(), "user", jwt_algorithms, jwt_key)
}
