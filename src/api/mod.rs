pub mod color_info;
pub mod color_schemes;
pub mod product_search;
pub mod query;

pub use color_info::{handle_color_info, ColorInfo, ColorInfoQuery, __path_handle_color_info};
pub use color_schemes::{handle_color_schemes, X_CACHE, __path_handle_color_schemes};
pub use product_search::{handle_product_search, ProductSearchRequest, __path_handle_product_search};
pub use query::ColorQuery;
