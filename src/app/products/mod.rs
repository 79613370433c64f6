//! 商品列表函数

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Product, ProductsResponse};
pub use service::{ProductService, ProductStore};
