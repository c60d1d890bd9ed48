//! Create handler.
//!
//! `POST /api/v1/vendors`

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use vendor_service::{VendorDTO, VendorService};

use crate::error::RestResult;
use crate::extractors::VendorBody;
use crate::state::AppState;

/// Handler for creating a vendor.
///
/// The body is passed to the service as-is; the service assigns the id and
/// derives `vendor_url`. The returned DTO is echoed back with a `Location`
/// header pointing at it.
///
/// # HTTP Request
///
/// `POST /api/v1/vendors`
///
/// # Response
///
/// - `201 Created` - Vendor created
/// - `400 Bad Request` - Malformed body or rejected by the service
/// - `415 Unsupported Media Type` - Body is not JSON
///
/// # Example
///
/// ```http
/// POST /api/v1/vendors HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Nuts for Nuts Company"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    VendorBody(vendor): VendorBody<VendorDTO>,
) -> RestResult<Response>
where
    S: VendorService,
{
    debug!(name = %vendor.name, "Processing create request");

    let created = state.service().create(vendor).await?;

    let mut headers = HeaderMap::new();
    if let Some(url) = created.url.as_deref() {
        match HeaderValue::from_str(url) {
            Ok(location) => {
                headers.insert(header::LOCATION, location);
            }
            Err(_) => warn!(url = %url, "Vendor URL is not a valid Location header"),
        }
    }

    debug!(id = ?created.id, "Vendor created");
    Ok((StatusCode::CREATED, headers, Json(created)).into_response())
}
