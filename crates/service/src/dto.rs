//! Data transfer objects for the vendor resource.
//!
//! The serde attributes here are the whole wire contract: `url` travels as
//! `vendor_url`, absent optional fields are omitted, and unknown keys are
//! rejected.

use serde::{Deserialize, Serialize};

/// Path prefix of the vendor collection. Vendor URLs are `{VENDOR_BASE_URL}/{id}`.
pub const VENDOR_BASE_URL: &str = "/api/v1/vendors";

/// Returns the canonical resource URL for a vendor id.
pub fn vendor_url(id: i64) -> String {
    format!("{}/{}", VENDOR_BASE_URL, id)
}

/// A vendor as it appears on the wire.
///
/// Inbound payloads usually carry only `name`; `id` and `url` are filled in by
/// the service on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorDTO {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Self link, always `/api/v1/vendors/{id}` when set by the service.
    #[serde(
        rename = "vendor_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl VendorDTO {
    /// Creates an inbound DTO carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            url: None,
        }
    }

    /// Creates a fully populated DTO for a stored vendor.
    pub fn stored(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            url: Some(vendor_url(id)),
        }
    }
}

/// Partial vendor used by PATCH. `None` leaves the stored field unchanged.
///
/// `id` and `vendor_url` are accepted so clients can echo a full DTO back, but
/// they are never applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorPatch {
    /// Ignored; the path id is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// New display name, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ignored; URLs are derived by the service.
    #[serde(
        rename = "vendor_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl VendorPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Envelope for the list-all response: `{"vendors": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorListDTO {
    /// Vendors in the order the service reported them.
    pub vendors: Vec<VendorDTO>,
}

impl From<Vec<VendorDTO>> for VendorListDTO {
    fn from(vendors: Vec<VendorDTO>) -> Self {
        Self { vendors }
    }
}
