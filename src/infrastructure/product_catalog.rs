use std::collections::HashMap;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductCatalog;
use crate::domain::Product;

/// Fixed product listing, built once at startup.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductCatalog {
    products: HashMap<u64, Product>,
}

impl InMemoryProductCatalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_by_id(&self, id: u64) -> Result<Option<Product>, DomainError> {
        Ok(self.products.get(&id).cloned())
    }
}
