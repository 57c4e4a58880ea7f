use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::errors::DomainError;
use crate::domain::ports::AddressRepository;
use crate::domain::Address;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl<T> From<PoisonError<T>> for DomainError {
    fn from(e: PoisonError<T>) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryAddressRepository {
    rows: RwLock<HashMap<String, Address>>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addresses(addresses: impl IntoIterator<Item = Address>) -> Self {
        let rows = addresses
            .into_iter()
            .map(|a| (a.postal_code().to_string(), a))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl AddressRepository for InMemoryAddressRepository {
    fn find_by_postal_code(&self, postal_code: &str) -> Result<Option<Address>, DomainError> {
        let rows = self.rows.read()?;
        Ok(rows.get(postal_code).cloned())
    }

    fn save(&self, address: Address) -> Result<(), DomainError> {
        let mut rows = self.rows.write()?;
        log::debug!("saving address for postal code {}", address.postal_code());
        rows.insert(address.postal_code().to_string(), address);
        Ok(())
    }

    fn delete(&self, postal_code: &str) -> Result<bool, DomainError> {
        let mut rows = self.rows.write()?;
        Ok(rows.remove(postal_code).is_some())
    }

    fn count(&self) -> Result<usize, DomainError> {
        Ok(self.rows.read()?.len())
    }
}
