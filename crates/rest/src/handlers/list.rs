//! List handler.
//!
//! `GET /api/v1/vendors`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use vendor_service::{VendorListDTO, VendorService};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing every vendor.
///
/// Wraps whatever the service reports in the `{"vendors": [...]}` envelope,
/// preserving its order.
///
/// # Response
///
/// - `200 OK` - Always, with the envelope (possibly empty)
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: VendorService,
{
    debug!("Processing list request");

    let vendors = state.service().get_all().await?;

    debug!(count = vendors.len(), "Returning vendor list");
    Ok((StatusCode::OK, Json(VendorListDTO::from(vendors))).into_response())
}
