use std::sync::Arc;

use bigdecimal::BigDecimal;

use super::customer::{Address, Customer};
use super::errors::DomainError;
use super::product::Product;

pub trait CustomerLookup: Send + Sync {
    fn find_by_id(&self, id: u64) -> Result<Option<Customer>, DomainError>;
    fn save(&self, customer: &Customer) -> Result<(), DomainError>;
}

/// Lets one shared lookup instance stand in wherever a lookup is expected.
impl<T: CustomerLookup + ?Sized> CustomerLookup for Arc<T> {
    fn find_by_id(&self, id: u64) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_id(id)
    }

    fn save(&self, customer: &Customer) -> Result<(), DomainError> {
        (**self).save(customer)
    }
}

/// Address storage keyed by postal code.
///
/// Callers depend on this trait only; the backing store is chosen at wiring
/// time.
pub trait AddressRepository: Send + Sync {
    fn find_by_postal_code(&self, postal_code: &str) -> Result<Option<Address>, DomainError>;
    /// Inserts the address, replacing any existing one with the same code.
    fn save(&self, address: Address) -> Result<(), DomainError>;
    /// Returns whether an address was stored under `postal_code`.
    fn delete(&self, postal_code: &str) -> Result<bool, DomainError>;
    fn count(&self) -> Result<usize, DomainError>;

    fn exists_by_postal_code(&self, postal_code: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_postal_code(postal_code)?.is_some())
    }

    /// Like [`find_by_postal_code`](Self::find_by_postal_code) but treats a
    /// missing address as [`DomainError::AddressNotFound`].
    fn get_by_postal_code(&self, postal_code: &str) -> Result<Address, DomainError> {
        self.find_by_postal_code(postal_code)?
            .ok_or_else(|| DomainError::AddressNotFound(postal_code.to_string()))
    }
}

impl<T: AddressRepository + ?Sized> AddressRepository for Arc<T> {
    fn find_by_postal_code(&self, postal_code: &str) -> Result<Option<Address>, DomainError> {
        (**self).find_by_postal_code(postal_code)
    }

    fn save(&self, address: Address) -> Result<(), DomainError> {
        (**self).save(address)
    }

    fn delete(&self, postal_code: &str) -> Result<bool, DomainError> {
        (**self).delete(postal_code)
    }

    fn count(&self) -> Result<usize, DomainError> {
        (**self).count()
    }
}

pub trait ProductCatalog: Send + Sync {
    fn find_by_id(&self, id: u64) -> Result<Option<Product>, DomainError>;
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    fn find_by_id(&self, id: u64) -> Result<Option<Product>, DomainError> {
        (**self).find_by_id(id)
    }
}

/// Computes the shipping fee for a destination postal code.
pub trait ShippingFeeCalculator: Send + Sync {
    fn calculate(&self, postal_code: &str) -> Result<BigDecimal, DomainError>;
}

impl<T: ShippingFeeCalculator + ?Sized> ShippingFeeCalculator for Arc<T> {
    fn calculate(&self, postal_code: &str) -> Result<BigDecimal, DomainError> {
        (**self).calculate(postal_code)
    }
}
