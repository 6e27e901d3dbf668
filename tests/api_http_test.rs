use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`
use workshop::domain::OrderStatus;
use workshop::{db, seed, server};

// Helper to build the full application over a fresh in-memory database
async fn setup_app() -> (Router, sea_orm::DatabaseConnection) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    (server::build_router(db.clone(), &[]), db)
}

async fn setup_seeded_app() -> Router {
    let (app, db) = setup_app().await;
    seed::seed_test_data(&db).await.expect("Failed to seed");
    app
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = setup_app().await;
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "workshop");
}

#[tokio::test]
async fn test_list_users_empty() {
    let (app, _) = setup_app().await;
    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_get_user_not_found_body() {
    let (app, _) = setup_app().await;
    let response = app.oneshot(get("/api/users/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Resource not found");
    assert_eq!(json["message"], "Resource not found. Id 999");
    assert_eq!(json["path"], "/api/users/999");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_create_then_get_user() {
    let (app, _) = setup_app().await;

    let payload = serde_json::json!({
        "name": "Maria Brown",
        "email": "maria@gmail.com",
        "phone": "988888888",
        "password": "123456"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/users", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap();

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/users/{}", id));
    assert!(created.get("password").is_none());

    let response = app.oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_update_user() {
    let app = setup_seeded_app().await;

    let payload = serde_json::json!({
        "name": "Jose Silva",
        "email": "jose.silva@gmail.com",
        "phone": "966666666"
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/users/1", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Jose Silva");

    let response = app
        .oneshot(json_request("PUT", "/api/users/77", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let (app, db) = setup_app().await;
    let user = workshop::models::user::ActiveModel {
        name: Set("Alex Green".to_string()),
        email: Set("alex@gmail.com".to_string()),
        phone: Set("977777777".to_string()),
        password: Set("hash".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let delete = |uri: String| {
        Request::builder()
            .uri(uri)
            .method("DELETE")
            .body(Body::empty())
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(delete(format!("/api/users/{}", user.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(delete(format!("/api/users/{}", user.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_with_orders_is_bad_request() {
    let app = setup_seeded_app().await;

    let req = Request::builder()
        .uri("/api/users/1")
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Database error");
    assert_eq!(json["path"], "/api/users/1");
}

#[tokio::test]
async fn test_products_and_categories() {
    let app = setup_seeded_app().await;

    let response = app.clone().oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products = body_json(response).await;
    assert_eq!(products.as_array().unwrap().len(), 5);

    let response = app.clone().oneshot(get("/api/products/2")).await.unwrap();
    let tv = body_json(response).await;
    assert_eq!(tv["name"], "Smart TV");
    assert_eq!(tv["categories"].as_array().unwrap().len(), 2);

    let response = app.clone().oneshot(get("/api/categories")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let response = app.clone().oneshot(get("/api/categories/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/products/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["path"], "/api/products/9");
}

#[tokio::test]
async fn test_get_order() {
    let app = setup_seeded_app().await;

    let response = app.clone().oneshot(get("/api/orders/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let order = body_json(response).await;
    assert_eq!(order["order_status"], "PAID");
    assert_eq!(order["client_id"], 1);
    assert_eq!(order["total"], 1431.0);
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["items"][0]["sub_total"], 181.0);
    assert_eq!(order["payment"]["moment"], "2019-06-20T21:53:07Z");

    let response = app.clone().oneshot(get("/api/orders")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    let response = app.oneshot(get("/api/orders/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_with_corrupt_status_is_server_error() {
    let (app, db) = setup_app().await;
    let user = workshop::models::user::ActiveModel {
        name: Set("Jose".to_string()),
        email: Set("jose@gmail.com".to_string()),
        phone: Set("988888888".to_string()),
        password: Set("hash".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    workshop::models::order::ActiveModel {
        moment: Set("2019-06-20T19:53:07Z".to_string()),
        order_status: Set(OrderStatus::Delivered.code() + 10),
        client_id: Set(user.id),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let response = app.oneshot(get("/api/orders/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["status"], 500);
    assert_eq!(json["error"], "Database error");
    assert_eq!(json["path"], "/api/orders/1");
}

#[tokio::test]
async fn test_non_numeric_id_uses_error_body() {
    let (app, _) = setup_app().await;
    let response = app.oneshot(get("/api/users/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["path"], "/api/users/abc");
    assert!(json["message"].as_str().is_some());
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_malformed_user_body_uses_error_body() {
    let (app, _) = setup_app().await;

    let req = Request::builder()
        .uri("/api/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["path"], "/api/users");

    // Well-formed JSON missing required fields
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            serde_json::json!({ "name": "Maria Brown" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["path"], "/api/users");

    let req = Request::builder()
        .uri("/api/users/1")
        .method("PUT")
        .body(Body::from("name=Maria"))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unsupported Media Type");
    assert_eq!(json["path"], "/api/users/1");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = setup_app().await;
    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/users/{id}"].is_object());
}
