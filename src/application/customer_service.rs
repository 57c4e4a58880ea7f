use std::collections::HashMap;

use crate::domain::errors::DomainError;
use crate::domain::ports::{AddressRepository, CustomerLookup};
use crate::domain::Customer;

/// Customer lookup that synthesizes a record for any identifier.
///
/// Build it once at startup and share it behind an `Arc`; every consumer
/// then sees the same instance.
pub struct CustomerService<A> {
    addresses: A,
    postal_codes: HashMap<u64, String>,
    default_postal_code: Option<String>,
}

impl<A: AddressRepository> CustomerService<A> {
    pub fn new(addresses: A) -> Self {
        Self {
            addresses,
            postal_codes: HashMap::new(),
            default_postal_code: None,
        }
    }

    /// Postal code used for customers without an explicit assignment.
    pub fn with_default_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.default_postal_code = Some(postal_code.into());
        self
    }

    pub fn assign_postal_code(mut self, customer_id: u64, postal_code: impl Into<String>) -> Self {
        self.postal_codes.insert(customer_id, postal_code.into());
        self
    }

    fn postal_code_for(&self, customer_id: u64) -> Option<&str> {
        self.postal_codes
            .get(&customer_id)
            .or(self.default_postal_code.as_ref())
            .map(String::as_str)
    }

    fn build_customer(&self, id: u64) -> Result<Customer, DomainError> {
        let name = format!("Customer #{}", id);
        let Some(postal_code) = self.postal_code_for(id) else {
            return Ok(Customer::new(id, name, None));
        };

        match self.addresses.get_by_postal_code(postal_code) {
            Ok(address) => Ok(Customer::new(id, name, Some(address))),
            Err(e @ DomainError::AddressNotFound(_)) => {
                log::warn!("customer {}: {}", id, e);
                Ok(Customer::with_unresolved_postal_code(id, name, postal_code))
            }
            Err(e) => Err(e),
        }
    }
}

impl<A: AddressRepository> CustomerLookup for CustomerService<A> {
    fn find_by_id(&self, id: u64) -> Result<Option<Customer>, DomainError> {
        log::debug!("looking up customer {}", id);
        self.build_customer(id).map(Some)
    }

    fn save(&self, customer: &Customer) -> Result<(), DomainError> {
        log::info!("saving customer {} ({})", customer.id(), customer.name());
        Ok(())
    }
}
