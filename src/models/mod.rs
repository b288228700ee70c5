pub mod config;
pub mod product;

pub use config::{AppConfig, CacheConfig, FilterConfig, ProductsConfig, SourceKind};
pub use product::Product;
