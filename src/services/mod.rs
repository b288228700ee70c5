pub mod catalog_source;
pub mod http_source;
pub mod product_source;
pub mod scheme_cache;

pub use catalog_source::CatalogSource;
pub use http_source::{ClientCredentials, HttpProductSource};
pub use product_source::{ProductSource, SourceError};
pub use scheme_cache::{CachedSchemes, InMemorySchemeCache, SchemeCache};
