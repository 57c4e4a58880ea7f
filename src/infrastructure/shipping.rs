use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::ports::ShippingFeeCalculator;

/// Charges the same fee for every destination.
#[derive(Debug, Clone)]
pub struct FlatRateShipping {
    fee: BigDecimal,
}

impl FlatRateShipping {
    pub fn new(fee: BigDecimal) -> Self {
        Self { fee }
    }
}

impl ShippingFeeCalculator for FlatRateShipping {
    fn calculate(&self, postal_code: &str) -> Result<BigDecimal, DomainError> {
        log::debug!("flat rate {} for postal code {}", self.fee, postal_code);
        Ok(self.fee.clone())
    }
}

/// Fee table keyed by postal-code prefix.
///
/// The longest matching prefix wins; codes matching no prefix pay the
/// default fee.
#[derive(Debug, Clone)]
pub struct PostalZoneShipping {
    default_fee: BigDecimal,
    zones: Vec<(String, BigDecimal)>,
}

impl PostalZoneShipping {
    pub fn new(
        default_fee: BigDecimal,
        zones: impl IntoIterator<Item = (String, BigDecimal)>,
    ) -> Self {
        let mut zones: Vec<_> = zones.into_iter().collect();
        // Longest prefix first so the first hit is the most specific one.
        zones.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { default_fee, zones }
    }
}

impl ShippingFeeCalculator for PostalZoneShipping {
    fn calculate(&self, postal_code: &str) -> Result<BigDecimal, DomainError> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(DomainError::InvalidInput(
                "postal code must not be empty".to_string(),
            ));
        }

        let fee = self
            .zones
            .iter()
            .find(|(prefix, _)| postal_code.starts_with(prefix.as_str()))
            .map(|(_, fee)| fee)
            .unwrap_or(&self.default_fee);
        Ok(fee.clone())
    }
}
