//! Display currency routes.
//!
//! Clients read the active preset, switch it, and ask the server to format
//! amounts so every stat card renders money the same way.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::{AppState, error::error_response};
use fransuite_core::currency::{CurrencySettings, CurrencyStore, presets};
use fransuite_shared::AppError;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currency", get(get_currency).put(update_currency))
        .route("/currency/presets", get(list_presets))
        .route("/currency/format", post(format_amount))
}

/// Request body for switching the display currency.
#[derive(Debug, Deserialize)]
pub struct UpdateCurrencyRequest {
    /// Currency code, e.g. "USD".
    pub code: String,
}

/// Response after an update request.
#[derive(Debug, Serialize)]
pub struct UpdateCurrencyResponse {
    /// False when the code was not a known currency and nothing changed.
    pub applied: bool,
    /// Preset active after the request.
    pub settings: &'static CurrencySettings,
}

/// Request body for formatting an amount.
///
/// `amount` may be a JSON number or a numeric string; strings keep full
/// decimal precision.
#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    /// Amount to format.
    pub amount: Value,
}

/// Formatted amount.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    /// Display string, e.g. "$1,234.50".
    pub formatted: String,
    /// Currency the amount was formatted in.
    pub code: String,
}

fn currency_store(state: &AppState) -> Result<&Arc<CurrencyStore>, Response> {
    state.currency.store().map_err(|e| {
        error!(error = %e, "Currency route called before the store was provided");
        error_response(&AppError::Internal(e.to_string()))
    })
}

/// GET `/currency` - Active preset and loading flag.
async fn get_currency(State(state): State<AppState>) -> impl IntoResponse {
    match currency_store(&state) {
        Ok(store) => (StatusCode::OK, Json(json!(store.snapshot()))).into_response(),
        Err(response) => response,
    }
}

/// GET `/currency/presets` - All selectable presets.
async fn list_presets() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "presets": presets() })))
}

/// PUT `/currency` - Switch the display currency.
///
/// Unknown codes are not an error: the response reports `applied: false`
/// with the unchanged preset.
async fn update_currency(
    State(state): State<AppState>,
    Json(body): Json<UpdateCurrencyRequest>,
) -> impl IntoResponse {
    let store = match currency_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let applied = store.update_currency(&body.code).await;
    let response = UpdateCurrencyResponse {
        applied,
        settings: store.active_settings(),
    };
    (StatusCode::OK, Json(json!(response))).into_response()
}

/// POST `/currency/format` - Format an amount in the active currency.
///
/// The amount is checked here, before the formatter sees it: anything other
/// than a JSON number or a numeric string is rejected with 400
/// `VALIDATION_ERROR`. Accepted numbers that the preset rules cannot render
/// still get the formatter's plain fallback.
async fn format_amount(
    State(state): State<AppState>,
    Json(body): Json<FormatRequest>,
) -> impl IntoResponse {
    let store = match currency_store(&state) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let formatted = match &body.amount {
        Value::Number(n) => match n.as_f64() {
            Some(amount) => store.format_currency(amount),
            None => return invalid_amount(),
        },
        Value::String(s) => match Decimal::from_str(s.trim()) {
            Ok(amount) => store.format_decimal(amount),
            Err(_) => return invalid_amount(),
        },
        _ => return invalid_amount(),
    };

    let response = FormatResponse {
        formatted,
        code: store.active_settings().code().to_string(),
    };
    (StatusCode::OK, Json(json!(response))).into_response()
}

fn invalid_amount() -> Response {
    error_response(&AppError::Validation(
        "amount must be a number or numeric string".into(),
    ))
}
