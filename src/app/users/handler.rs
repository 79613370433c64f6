//! 用户处理器

use std::sync::Arc;

use axum::extract::State;

use super::service::{UserService, UserStore};
use crate::core::FunctionResponse;

pub async fn get_users<S>(State(service): State<Arc<UserService<S>>>) -> FunctionResponse
where
    S: UserStore + 'static,
{
    service.invoke().await
}
