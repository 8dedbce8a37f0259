//! Handler-level tests against a fixed clock and the built-in catalog.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use cel_content::{Composer, ContentCatalog, SiteLinks, SubscriptionRequest};
use cel_core::{CalendarDay, MoonPhase, ZodiacSign};
use cel_server::routes::{self, DateQuery, DigestQuery, HoroscopeQuery, SignsRequest};
use cel_server::{AppState, FixedClock};
use pretty_assertions::assert_eq;

fn new_years_day() -> CalendarDay {
    CalendarDay::parse("2025-01-01").unwrap()
}

fn state() -> Arc<AppState> {
    AppState::new(
        Composer::new(ContentCatalog::builtin().unwrap()),
        SiteLinks::new("https://example.com", "Celestial Calendar"),
        Arc::new(FixedClock(new_years_day())),
    )
}

fn sign_query(sign: &str) -> Result<Query<HoroscopeQuery>, QueryRejection> {
    Ok(Query(HoroscopeQuery {
        sign: Some(sign.to_string()),
        ..Default::default()
    }))
}

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = routes::health().await;
    assert_eq!(body.status, "ok");
}

#[tokio::test]
async fn horoscope_uses_the_injected_clock() {
    let Json(body) = routes::horoscope(State(state()), sign_query("Aries"))
        .await
        .unwrap();

    assert_eq!(body.sign, ZodiacSign::Aries);
    assert_eq!(body.date, new_years_day());
    assert!(body.horoscope.ends_with("**Power Time:** Midday"));

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["date"], "2025-01-01");
    assert_eq!(json["sign"], "Aries");
}

#[tokio::test]
async fn taurus_is_stable_within_a_day() {
    let state = state();
    let Json(first) = routes::horoscope(State(state.clone()), sign_query("Taurus"))
        .await
        .unwrap();
    let Json(second) = routes::horoscope(State(state), sign_query("taurus"))
        .await
        .unwrap();
    assert_eq!(first.horoscope, second.horoscope);
}

#[tokio::test]
async fn unknown_sign_is_bad_request() {
    let err = routes::horoscope(State(state()), sign_query("Ophiuchus"))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_sign_is_bad_request() {
    let err = routes::horoscope(State(state()), Ok(Query(HoroscopeQuery::default())))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Zodiac sign is required");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn explicit_date_and_brief_style() {
    let query = Ok(Query(HoroscopeQuery {
        sign: Some("Aries".into()),
        style: Some("brief".into()),
        date: Some("2025-01-01".into()),
    }));
    let Json(body) = routes::horoscope(State(state()), query).await.unwrap();
    assert!(body.horoscope.starts_with("The stars align"));
}

#[tokio::test]
async fn bad_date_and_style_are_rejected() {
    let query = Ok(Query(HoroscopeQuery {
        sign: Some("Aries".into()),
        date: Some("2025-02-30".into()),
        ..Default::default()
    }));
    let err = routes::horoscope(State(state()), query).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let query = Ok(Query(HoroscopeQuery {
        sign: Some("Aries".into()),
        style: Some("weekly".into()),
        ..Default::default()
    }));
    let err = routes::horoscope(State(state()), query).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn details_include_lucky_attributes() {
    let Json(body) = routes::horoscope_details(State(state()), sign_query("Aries"))
        .await
        .unwrap();
    assert_eq!(body.lucky.number, 4);
    assert_eq!(body.lucky.color, "Red");

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["lucky"]["powerTime"], "Midday");
}

#[tokio::test]
async fn signs_from_birth_data() {
    let request = SignsRequest {
        birth_date: "1990-08-15".into(),
        birth_time: "06:45".into(),
    };
    let Json(body) = routes::signs(Ok(Json(request))).await.unwrap();
    assert_eq!(body.sun, ZodiacSign::Leo);
    assert_eq!(body.moon, ZodiacSign::Cancer);
}

#[tokio::test]
async fn signs_reject_bad_time() {
    let request = SignsRequest {
        birth_date: "1990-08-15".into(),
        birth_time: "25:00".into(),
    };
    let err = routes::signs(Ok(Json(request))).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn moon_and_rituals_agree_on_phase() {
    let query = || {
        Ok(Query(DateQuery {
            date: Some("2000-01-21".into()),
        }))
    };
    let Json(moon) = routes::moon(State(state()), query()).await.unwrap();
    let Json(rituals) = routes::rituals(State(state()), query()).await.unwrap();
    let Json(today) = routes::ritual_today(State(state()), query()).await.unwrap();

    assert_eq!(moon.phase, MoonPhase::Full);
    assert_eq!(rituals.phase, MoonPhase::Full);
    assert_eq!(rituals.rituals.len(), 3);
    assert!(rituals.rituals.contains(&today.ritual));
}

#[tokio::test]
async fn subscription_validation() {
    let Json(body) = routes::validate_subscription(Ok(Json(SubscriptionRequest::new(
        "luna@example.com",
        "Pisces",
    ))))
    .await
    .unwrap();
    assert_eq!(body.sign, ZodiacSign::Pisces);

    let err = routes::validate_subscription(Ok(Json(SubscriptionRequest::new(
        "luna",
        "Pisces",
    ))))
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid email address");
}

#[tokio::test]
async fn digest_preview_links_to_site() {
    let query = Ok(Query(DigestQuery {
        sign: Some("Leo".into()),
        email: Some("luna@example.com".into()),
        ..Default::default()
    }));
    let Json(body) = routes::digest(State(state()), query).await.unwrap();
    assert_eq!(body.subject, "🌟 Your Daily Horoscope - 1/1/2025");
    assert!(body.html.contains("https://example.com/unsubscribe?email=luna%40example.com"));
    assert!(body.text.ends_with("Share your light with the world."));
}
