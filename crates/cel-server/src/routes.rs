//! HTTP handlers. Each one resolves its inputs, then delegates to the
//! composer or one of the pure lookup modules.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use cel_content::{SubscriptionRequest, birth_chart, lunar};
use cel_core::responses::{
    BirthSigns, DailyHoroscope, DailyRitual, Digest, HealthResponse, HoroscopeResponse,
    MoonReport, RitualsResponse, SubscriptionResponse,
};
use cel_core::{BirthTime, CalendarDay, CoreError, HoroscopeStyle, ZodiacSign};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HoroscopeQuery {
    pub sign: Option<String>,
    pub style: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DigestQuery {
    pub sign: Option<String>,
    pub date: Option<String>,
    /// Recipient for the unsubscribe link.
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignsRequest {
    pub birth_date: String,
    pub birth_time: String,
}

/// Empty query values count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn require_sign(sign: Option<&str>) -> Result<ZodiacSign, CoreError> {
    present(sign)
        .ok_or_else(|| CoreError::invalid_input("Zodiac sign is required"))?
        .parse()
}

/// The requested day, or today according to the state's clock.
fn resolve_day(state: &AppState, date: Option<&str>) -> Result<CalendarDay, CoreError> {
    present(date).map_or_else(|| Ok(state.clock.today()), CalendarDay::parse)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn horoscope(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HoroscopeQuery>, QueryRejection>,
) -> Result<Json<HoroscopeResponse>, ApiError> {
    let Query(query) = query?;
    let sign = require_sign(query.sign.as_deref())?;
    let style = present(query.style.as_deref())
        .map(str::parse::<HoroscopeStyle>)
        .transpose()?
        .unwrap_or_default();
    let day = resolve_day(&state, query.date.as_deref())?;
    Ok(Json(state.composer.horoscope(sign, day, style)))
}

pub async fn horoscope_details(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HoroscopeQuery>, QueryRejection>,
) -> Result<Json<DailyHoroscope>, ApiError> {
    let Query(query) = query?;
    let sign = require_sign(query.sign.as_deref())?;
    let day = resolve_day(&state, query.date.as_deref())?;
    Ok(Json(state.composer.daily_horoscope(sign, day)))
}

pub async fn signs(
    payload: Result<Json<SignsRequest>, JsonRejection>,
) -> Result<Json<BirthSigns>, ApiError> {
    let Json(request) = payload?;
    let day = CalendarDay::parse(&request.birth_date)?;
    let time = BirthTime::parse(&request.birth_time)?;
    let signs = birth_chart::signs(day, time);
    tracing::debug!(sun = %signs.sun, moon = %signs.moon, "calculated birth signs");
    Ok(Json(signs))
}

pub async fn moon(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<MoonReport>, ApiError> {
    let Query(query) = query?;
    let day = resolve_day(&state, query.date.as_deref())?;
    Ok(Json(lunar::moon_report(day)))
}

pub async fn rituals(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<RitualsResponse>, ApiError> {
    let Query(query) = query?;
    let day = resolve_day(&state, query.date.as_deref())?;
    Ok(Json(state.composer.rituals(day)))
}

pub async fn ritual_today(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<DailyRitual>, ApiError> {
    let Query(query) = query?;
    let day = resolve_day(&state, query.date.as_deref())?;
    Ok(Json(state.composer.ritual_of_the_day(day)))
}

pub async fn validate_subscription(
    payload: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let Json(request) = payload?;
    let subscription = request.validate()?;
    Ok(Json(subscription.into_response()))
}

pub async fn digest(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DigestQuery>, QueryRejection>,
) -> Result<Json<Digest>, ApiError> {
    let Query(query) = query?;
    let sign = require_sign(query.sign.as_deref())?;
    let day = resolve_day(&state, query.date.as_deref())?;
    let recipient = present(query.email.as_deref());
    Ok(Json(state.composer.digest(sign, day, &state.links, recipient)))
}
