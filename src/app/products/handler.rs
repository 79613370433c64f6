//! 商品处理器

use std::sync::Arc;

use axum::extract::State;

use super::service::{ProductService, ProductStore};
use crate::core::FunctionResponse;

pub async fn get_products<S>(State(service): State<Arc<ProductService<S>>>) -> FunctionResponse
where
    S: ProductStore + 'static,
{
    service.invoke().await
}
