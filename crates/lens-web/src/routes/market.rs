//! Market data route handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use lens_core::MarketReport;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::state::AppState;

/// Error message returned for every failure.
pub const FETCH_FAILED: &str = "Failed to fetch market data";

#[derive(Deserialize)]
pub struct MarketQuery {
    #[serde(rename = "type")]
    pub category: Option<String>,
}

/// GET /api/market-data?type=<category>
pub async fn market_data(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<MarketReport>, (StatusCode, Json<Value>)> {
    let category = lens_core::normalize_category(query.category.as_deref());
    let request_id = Uuid::new_v4();
    let span = info_span!("market_data", %request_id, category);

    lens_core::generate_report(state.generator.as_ref(), category)
        .instrument(span)
        .await
        .map(Json)
        .map_err(|e| {
            error!(%request_id, category, kind = e.kind(), error = %e, "Error in /api/market-data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_FAILED })),
            )
        })
}
