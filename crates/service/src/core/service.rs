//! The vendor service capability.
//!
//! This module defines the [`VendorService`] trait. The HTTP endpoint is
//! written against this trait only; it never sees how vendors are stored.

use async_trait::async_trait;

use crate::dto::{VendorDTO, VendorPatch};
use crate::error::ServiceResult;

/// Business operations over the vendor resource.
///
/// Implementations own id assignment, URL derivation and every validation
/// rule. Every DTO they return for a stored vendor has `id` set and `url`
/// equal to `/api/v1/vendors/{id}`.
///
/// # Example
///
/// ```ignore
/// use vendor_service::core::VendorService;
/// use vendor_service::dto::VendorDTO;
///
/// async fn rename<S: VendorService>(service: &S, id: i64) -> ServiceResult<VendorDTO> {
///     service.save_by_id_and_dto(id, VendorDTO::named("Exotic Fruits Company")).await
/// }
/// ```
#[async_trait]
pub trait VendorService: Send + Sync {
    /// Returns a human-readable name for this implementation.
    fn backend_name(&self) -> &'static str;

    /// Returns every vendor.
    async fn get_all(&self) -> ServiceResult<Vec<VendorDTO>>;

    /// Returns a single vendor.
    ///
    /// # Errors
    ///
    /// * `ServiceError::NotFound` - If no vendor has this id
    async fn get_by_id(&self, id: i64) -> ServiceResult<VendorDTO>;

    /// Stores a new vendor and returns it with its assigned id and url.
    ///
    /// Any `id` or `url` on the input is ignored.
    ///
    /// # Errors
    ///
    /// * `ServiceError::InvalidInput` - If the vendor cannot be stored
    async fn create(&self, vendor: VendorDTO) -> ServiceResult<VendorDTO>;

    /// Replaces the vendor with the given id.
    ///
    /// # Errors
    ///
    /// * `ServiceError::NotFound` - If no vendor has this id
    /// * `ServiceError::InvalidInput` - If the replacement is rejected
    async fn save_by_id_and_dto(&self, id: i64, vendor: VendorDTO) -> ServiceResult<VendorDTO>;

    /// Applies only the fields present in `patch` to the vendor with the given id.
    ///
    /// # Errors
    ///
    /// * `ServiceError::NotFound` - If no vendor has this id
    /// * `ServiceError::InvalidInput` - If a supplied field is rejected
    async fn patch_by_id_and_dto(&self, id: i64, patch: VendorPatch) -> ServiceResult<VendorDTO>;

    /// Deletes the vendor with the given id.
    ///
    /// # Errors
    ///
    /// * `ServiceError::NotFound` - If no vendor has this id
    async fn delete_by_id(&self, id: i64) -> ServiceResult<()>;
}

