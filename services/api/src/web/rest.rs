//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the receipt endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::protocol::{IdResponse, PointsResponse, RawItem, RawReceipt};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use receipt_processor_core::{scoring, service, Receipt, SubmitError};
use std::sync::Arc;
use tracing::{debug, error, info};
use utoipa::OpenApi;
use uuid::Uuid;

const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        process_receipt_handler,
        get_points_handler,
    ),
    components(
        schemas(RawReceipt, RawItem, IdResponse, PointsResponse)
    ),
    tags(
        (
            name = "Receipt Processor API",
            description = "Submit receipts and look up the points they earned."
        )
    )
)]
pub struct ApiDoc;

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Submit a receipt for processing.
///
/// The receipt is scored immediately and its points are kept under the returned ID.
#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = RawReceipt,
    responses(
        (status = 201, description = "Receipt processed", body = IdResponse),
        (status = 400, description = "The receipt is not valid JSON or cannot be scored"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn process_receipt_handler(
    State(app_state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let raw: RawReceipt = serde_json::from_slice(&body)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let receipt =
        Receipt::try_from(raw).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    debug!(
        retailer = %receipt.retailer,
        breakdown = ?scoring::breakdown(&receipt),
        "receipt scored"
    );

    let store = app_state.store.as_ref();
    let scored = service::submit_receipt(store, app_state.ids.as_ref(), &receipt)
        .await
        .map_err(|e| match e {
            SubmitError::Receipt(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            SubmitError::Port(e) => {
                error!("Failed to store receipt points: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process receipt".to_string(),
                )
            }
        })?;

    info!(id = %scored.id, points = scored.points, "receipt processed");
    Ok((StatusCode::CREATED, Json(IdResponse { id: scored.id })))
}

/// Returns the points awarded for the receipt with the given ID.
#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    responses(
        (status = 200, description = "The points awarded for the receipt", body = PointsResponse),
        (status = 404, description = "No receipt found for that ID"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The ID returned when the receipt was processed.")
    )
)]
pub async fn get_points_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let not_found = || (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string());

    // Ids are issued in lowercase hyphenated form; any other spelling was never issued.
    let issued = Uuid::parse_str(&id)
        .ok()
        .filter(|receipt_id| receipt_id.hyphenated().to_string() == id);
    let Some(receipt_id) = issued else {
        debug!(%id, "points lookup for malformed id");
        return Err(not_found());
    };

    match service::points_for(app_state.store.as_ref(), receipt_id).await {
        Ok(Some(points)) => Ok(Json(PointsResponse { points })),
        Ok(None) => {
            debug!(%receipt_id, "points lookup miss");
            Err(not_found())
        }
        Err(e) => {
            error!("Failed to look up receipt points: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to look up receipt".to_string(),
            ))
        }
    }
}
