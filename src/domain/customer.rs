use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    postal_code: String,
}

impl Address {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
        }
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

/// A customer record as returned by a [`CustomerLookup`](super::ports::CustomerLookup).
///
/// Fields are private and there are no mutators: once looked up, a customer
/// stays as it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: u64,
    name: String,
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unresolved_postal_code: Option<String>,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            id,
            name: name.into(),
            address,
            unresolved_postal_code: None,
        }
    }

    /// A customer whose postal code has no registered address.
    pub fn with_unresolved_postal_code(
        id: u64,
        name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: None,
            unresolved_postal_code: Some(postal_code.into()),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// The postal code the address lookup reported as not found, if any.
    pub fn unresolved_postal_code(&self) -> Option<&str> {
        self.unresolved_postal_code.as_deref()
    }

    /// The postal code to ship to, if the customer has a usable one.
    ///
    /// Blank codes count as absent.
    pub fn shipping_postal_code(&self) -> Option<&str> {
        self.address
            .as_ref()
            .map(Address::postal_code)
            .filter(|code| !code.trim().is_empty())
    }
}
