//! In-memory vendor service.
//!
//! Vendors live in a `BTreeMap` behind a `parking_lot::RwLock`, so listings
//! come back in ascending id order. Ids are handed out from an atomic sequence
//! starting at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::core::VendorService;
use crate::dto::{VendorDTO, VendorPatch};
use crate::error::{ServiceError, ServiceResult};

/// A [`VendorService`] that keeps vendors in process memory.
#[derive(Debug)]
pub struct InMemoryVendorService {
    vendors: RwLock<BTreeMap<i64, String>>,
    next_id: AtomicI64,
}

impl Default for InMemoryVendorService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVendorService {
    /// Creates an empty service.
    pub fn new() -> Self {
        Self {
            vendors: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a service pre-populated with the given names, ids assigned in order.
    pub fn with_vendors<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let service = Self::new();
        {
            let mut vendors = service.vendors.write();
            for name in names {
                let id = service.next_id.fetch_add(1, Ordering::SeqCst);
                vendors.insert(id, name.into());
            }
        }
        service
    }

    /// Returns the number of stored vendors.
    pub fn len(&self) -> usize {
        self.vendors.read().len()
    }

    /// Returns true if no vendors are stored.
    pub fn is_empty(&self) -> bool {
        self.vendors.read().is_empty()
    }
}

fn check_name(name: &str) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::invalid("name must not be blank"));
    }
    Ok(())
}

#[async_trait]
impl VendorService for InMemoryVendorService {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get_all(&self) -> ServiceResult<Vec<VendorDTO>> {
        let vendors = self.vendors.read();
        Ok(vendors
            .iter()
            .map(|(id, name)| VendorDTO::stored(*id, name.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> ServiceResult<VendorDTO> {
        self.vendors
            .read()
            .get(&id)
            .map(|name| VendorDTO::stored(id, name.clone()))
            .ok_or(ServiceError::NotFound { id })
    }

    async fn create(&self, vendor: VendorDTO) -> ServiceResult<VendorDTO> {
        check_name(&vendor.name)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.vendors.write().insert(id, vendor.name.clone());

        debug!(id, name = %vendor.name, "Vendor created");
        Ok(VendorDTO::stored(id, vendor.name))
    }

    async fn save_by_id_and_dto(&self, id: i64, vendor: VendorDTO) -> ServiceResult<VendorDTO> {
        check_name(&vendor.name)?;

        let mut vendors = self.vendors.write();
        let stored = vendors.get_mut(&id).ok_or(ServiceError::NotFound { id })?;
        stored.clone_from(&vendor.name);

        debug!(id, name = %vendor.name, "Vendor replaced");
        Ok(VendorDTO::stored(id, vendor.name))
    }

    async fn patch_by_id_and_dto(&self, id: i64, patch: VendorPatch) -> ServiceResult<VendorDTO> {
        if let Some(name) = &patch.name {
            check_name(name)?;
        }

        let mut vendors = self.vendors.write();
        let stored = vendors.get_mut(&id).ok_or(ServiceError::NotFound { id })?;
        if let Some(name) = patch.name {
            *stored = name;
        }

        debug!(id, name = %stored, "Vendor patched");
        Ok(VendorDTO::stored(id, stored.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        match self.vendors.write().remove(&id) {
            Some(_) => {
                debug!(id, "Vendor deleted");
                Ok(())
            }
            None => Err(ServiceError::NotFound { id }),
        }
    }
}
