//! Stub vendor service.
//!
//! Stands in for a real [`VendorService`] in endpoint tests: it returns
//! canned DTOs and records every call so tests can check what the endpoint
//! passed through.

use async_trait::async_trait;
use parking_lot::Mutex;
use vendor_service::{ServiceError, ServiceResult, VendorDTO, VendorPatch, VendorService};

/// A call received by the stub, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetAll,
    GetById(i64),
    Create(VendorDTO),
    Save(i64, VendorDTO),
    Patch(i64, VendorPatch),
    Delete(i64),
}

/// Canned-response [`VendorService`].
///
/// - `get_all` returns the configured list.
/// - Single-vendor operations return the configured reply, or `NotFound`
///   (`Internal` for create) when none is set.
/// - A configured error overrides everything.
#[derive(Debug, Default)]
pub struct StubVendorService {
    list: Vec<VendorDTO>,
    reply: Option<VendorDTO>,
    error: Option<ServiceError>,
    calls: Mutex<Vec<Call>>,
}

impl StubVendorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning_list(mut self, list: Vec<VendorDTO>) -> Self {
        self.list = list;
        self
    }

    pub fn returning(mut self, reply: VendorDTO) -> Self {
        self.reply = Some(reply);
        self
    }

    pub fn failing_with(mut self, error: ServiceError) -> Self {
        self.error = Some(error);
        self
    }

    /// Returns every call received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> ServiceResult<()> {
        self.calls.lock().push(call);
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn reply_for(&self, id: i64) -> ServiceResult<VendorDTO> {
        self.reply.clone().ok_or(ServiceError::NotFound { id })
    }
}

#[async_trait]
impl VendorService for StubVendorService {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn get_all(&self) -> ServiceResult<Vec<VendorDTO>> {
        self.record(Call::GetAll)?;
        Ok(self.list.clone())
    }

    async fn get_by_id(&self, id: i64) -> ServiceResult<VendorDTO> {
        self.record(Call::GetById(id))?;
        self.reply_for(id)
    }

    async fn create(&self, vendor: VendorDTO) -> ServiceResult<VendorDTO> {
        self.record(Call::Create(vendor))?;
        self.reply.clone().ok_or_else(|| ServiceError::Internal {
            message: "stub has no reply configured".to_string(),
        })
    }

    async fn save_by_id_and_dto(&self, id: i64, vendor: VendorDTO) -> ServiceResult<VendorDTO> {
        self.record(Call::Save(id, vendor))?;
        self.reply_for(id)
    }

    async fn patch_by_id_and_dto(&self, id: i64, patch: VendorPatch) -> ServiceResult<VendorDTO> {
        self.record(Call::Patch(id, patch))?;
        self.reply_for(id)
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        self.record(Call::Delete(id))
    }
}
