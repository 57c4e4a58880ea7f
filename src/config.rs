use std::env;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::errors::AppError;

const DEFAULT_SHIPPING_FLAT_FEE: &str = "4.99";

/// Runtime settings, read from the environment (and `.env` via `dotenvy`).
///
/// | Variable                 | Format                 | Default |
/// |--------------------------|------------------------|---------|
/// | `SHIPPING_FLAT_FEE`      | decimal                | `4.99`  |
/// | `SHIPPING_ZONE_RATES`    | `prefix=fee,...`       | unset   |
/// | `ADDRESS_POSTAL_CODES`   | `code,code,...`        | unset   |
/// | `DEFAULT_POSTAL_CODE`    | postal code            | unset   |
/// | `CUSTOMER_POSTAL_CODES`  | `customer_id=code,...` | unset   |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub shipping_flat_fee: BigDecimal,
    /// When non-empty, fees are looked up per postal-code prefix and
    /// `shipping_flat_fee` becomes the fallback.
    pub shipping_zone_rates: Vec<(String, BigDecimal)>,
    /// Postal codes registered in the address store at startup.
    pub address_postal_codes: Vec<String>,
    pub default_postal_code: Option<String>,
    pub customer_postal_codes: Vec<(u64, String)>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let shipping_flat_fee = match get("SHIPPING_FLAT_FEE") {
            Some(raw) => parse_decimal("SHIPPING_FLAT_FEE", &raw)?,
            None => parse_decimal("SHIPPING_FLAT_FEE", DEFAULT_SHIPPING_FLAT_FEE)?,
        };

        let shipping_zone_rates = match get("SHIPPING_ZONE_RATES") {
            Some(raw) => parse_pairs("SHIPPING_ZONE_RATES", &raw, |prefix, fee| {
                Ok((prefix.to_string(), parse_decimal("SHIPPING_ZONE_RATES", fee)?))
            })?,
            None => Vec::new(),
        };

        let address_postal_codes = get("ADDRESS_POSTAL_CODES")
            .map(|raw| split_list(&raw).map(str::to_string).collect())
            .unwrap_or_default();

        let customer_postal_codes = match get("CUSTOMER_POSTAL_CODES") {
            Some(raw) => parse_pairs("CUSTOMER_POSTAL_CODES", &raw, |id, code| {
                let id = id.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("CUSTOMER_POSTAL_CODES: bad customer id '{}': {}", id, e))
                })?;
                Ok((id, code.to_string()))
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            shipping_flat_fee,
            shipping_zone_rates,
            address_postal_codes,
            default_postal_code: get("DEFAULT_POSTAL_CODE"),
            customer_postal_codes,
        })
    }
}

fn parse_decimal(key: &str, raw: &str) -> Result<BigDecimal, AppError> {
    let value = BigDecimal::from_str(raw)
        .map_err(|e| AppError::Config(format!("{}: invalid decimal '{}': {}", key, raw, e)))?;
    if value < BigDecimal::from(0) {
        return Err(AppError::Config(format!("{}: fee must not be negative", key)));
    }
    Ok(value)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_pairs<T>(
    key: &str,
    raw: &str,
    parse: impl Fn(&str, &str) -> Result<T, AppError>,
) -> Result<Vec<T>, AppError> {
    split_list(raw)
        .map(|entry| {
            let (left, right) = entry
                .split_once('=')
                .map(|(l, r)| (l.trim(), r.trim()))
                .filter(|(l, r)| !l.is_empty() && !r.is_empty())
                .ok_or_else(|| {
                    AppError::Config(format!("{}: expected 'key=value', got '{}'", key, entry))
                })?;
            parse(left, right)
        })
        .collect()
}
