//! Shared fixtures for integration tests: a mock upstream API with a few
//! posts, users and albums.

#![allow(dead_code)]

use placeholder_search::auth::Session;
use placeholder_search::config::Config;
use placeholder_search::gateway::SearchGateway;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn posts() -> Value {
    json!([
        { "userId": 1, "id": 1, "title": "Hello World", "body": "first post body" },
        { "userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore vitae" },
        { "userId": 2, "id": 3, "title": "ea molestias", "body": "someone said HELLO here" }
    ])
}

pub fn users() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031",
            "address": { "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough" },
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593",
            "address": { "street": "Victor Plains", "city": "Wisokyburgh" },
            "company": { "name": "Deckow-Crist" }
        }
    ])
}

pub fn albums() -> Value {
    json!([
        { "userId": 1, "id": 1, "title": "quidem molestiae enim" },
        { "userId": 2, "id": 2, "title": "Hello again album" }
    ])
}

/// Login endpoint that hands out `token`.
pub async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

/// GET `route` answering `body` with status 200.
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// GET `route` answering an empty body with `status`.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Login plus the three collections.
pub async fn mount_all_collections(server: &MockServer) {
    mount_login(server, "test-token").await;
    mount_json(server, "/posts", posts()).await;
    mount_json(server, "/users", users()).await;
    mount_json(server, "/albums", albums()).await;
}

pub fn gateway_for(server: &MockServer) -> SearchGateway {
    SearchGateway::new(&Config::for_testing(&server.uri()), Session::new())
        .expect("Failed to create gateway")
}

/// `(category, id)` pairs, ignoring the per-call timestamp.
pub fn keys(results: &[placeholder_search::models::SearchResult]) -> Vec<(String, String)> {
    results
        .iter()
        .map(|r| (r.category.clone().unwrap_or_default(), r.id.clone()))
        .collect()
}
