pub mod address_repo;
pub mod product_catalog;
pub mod shipping;

pub use address_repo::InMemoryAddressRepository;
pub use product_catalog::InMemoryProductCatalog;
pub use shipping::{FlatRateShipping, PostalZoneShipping};
