//! Requests sent through the full router: paths, methods, error bodies and CORS.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use cel_config::ServerConfig;
use cel_content::{Composer, ContentCatalog, SiteLinks};
use cel_core::CalendarDay;
use cel_server::{AppState, FixedClock, router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(
        Composer::new(ContentCatalog::builtin().unwrap()),
        SiteLinks::new("https://example.com", "Celestial Calendar"),
        Arc::new(FixedClock(CalendarDay::parse("2025-01-01").unwrap())),
    );
    router(state, &ServerConfig::default())
}

async fn send(request: Request<Body>) -> Response {
    app().oneshot(request).await.unwrap()
}

async fn get(uri: &str) -> Response {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &str) -> Response {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a JSON `{"error": ...}` body with the given status and return the message.
async fn error_message(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1, "unexpected body: {body}");
    object["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_route() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn horoscope_route_defaults_to_the_clock() {
    let response = get("/api/horoscope?sign=Aries").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["sign"], "Aries");
    assert_eq!(body["date"], "2025-01-01");
    assert!(
        body["horoscope"]
            .as_str()
            .unwrap()
            .ends_with("**Power Time:** Midday")
    );
}

#[tokio::test]
async fn unknown_sign_is_a_json_bad_request() {
    let message = error_message(
        get("/api/horoscope?sign=Ophiuchus").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "unknown zodiac sign 'Ophiuchus'");
}

#[tokio::test]
async fn undecodable_query_is_a_json_bad_request() {
    let message = error_message(
        get("/api/horoscope?sign=Leo&sign=Aries").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(message.contains("sign"), "{message}");

    let message = error_message(
        get("/api/moon?date=2025-01-01&date=2025-01-02").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(message.contains("date"), "{message}");
}

#[tokio::test]
async fn blank_query_values_are_absent() {
    let message = error_message(
        get("/api/horoscope?sign=&date=").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Zodiac sign is required");

    let response = get("/api/horoscope?sign=Aries&date=&style=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["date"], "2025-01-01");
}

#[tokio::test]
async fn bad_date_is_a_json_bad_request() {
    error_message(
        get("/api/rituals?date=2025-13-01").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn details_route_includes_lucky_attributes() {
    let response = get("/api/horoscope/details?sign=aries").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["lucky"],
        json!({ "number": 4, "color": "Red", "powerTime": "Midday" })
    );
}

#[tokio::test]
async fn signs_route_accepts_camel_case_body() {
    let response = post_json(
        "/api/signs",
        r#"{"birthDate":"1990-08-15","birthTime":"06:45"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "sun": "Leo", "moon": "Cancer" })
    );
}

#[tokio::test]
async fn malformed_json_body_is_a_json_bad_request() {
    error_message(
        post_json("/api/signs", r#"{"birthDate":"1990-08-15""#).await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    error_message(
        post_json("/api/subscribe/validate", r#"{"email": 42}"#).await,
        StatusCode::BAD_REQUEST,
    )
    .await;

    let without_content_type = send(
        Request::post("/api/signs")
            .body(Body::from(r#"{"birthDate":"1990-08-15","birthTime":"06:45"}"#))
            .unwrap(),
    )
    .await;
    error_message(without_content_type, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn subscription_route_validates() {
    let response = post_json(
        "/api/subscribe/validate",
        r#"{"email":" luna@example.com ","zodiacSign":"pisces"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["email"], "luna@example.com");
    assert_eq!(body["sign"], "Pisces");

    let message = error_message(
        post_json(
            "/api/subscribe/validate",
            r#"{"email":"luna@example.com","zodiacSign":"Ophiuchus"}"#,
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Please select a valid zodiac sign");
}

#[tokio::test]
async fn moon_and_ritual_routes() {
    let moon = json_body(get("/api/moon?date=2000-01-21").await).await;
    assert_eq!(moon["phase"], "full");

    let rituals = json_body(get("/api/rituals?date=2000-01-21").await).await;
    assert_eq!(rituals["rituals"].as_array().unwrap().len(), 3);

    let today = json_body(get("/api/rituals/today?date=2000-01-21").await).await;
    assert_eq!(today["phase"], "full");
    assert!(
        rituals["rituals"]
            .as_array()
            .unwrap()
            .contains(&today["ritual"])
    );
}

#[tokio::test]
async fn digest_route_fills_the_unsubscribe_link() {
    let response = get("/api/digest?sign=Leo&email=luna%40example.com").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(
        body["html"]
            .as_str()
            .unwrap()
            .contains("https://example.com/unsubscribe?email=luna%40example.com")
    );

    let body = json_body(get("/api/digest?sign=Leo&email=").await).await;
    assert!(body["html"].as_str().unwrap().contains("email=UNSUBSCRIBE_EMAIL"));
}

#[tokio::test]
async fn wrong_method_and_unknown_path() {
    assert_eq!(
        get("/api/signs").await.status(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        post_json("/api/horoscope?sign=Leo", "{}").await.status(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(get("/api/horoscopes").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = send(
        Request::get("/health")
            .header(header::ORIGIN, "https://thecelestialcalendar.com")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_preflight_lists_methods_and_max_age() {
    let response = send(
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/signs")
            .header(header::ORIGIN, "https://thecelestialcalendar.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "{methods}");
    }
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "3600");
}
