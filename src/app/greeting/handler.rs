//! 问候处理器，纯内存格式化，无外部 I/O

use std::collections::HashMap;

use axum::extract::Query;

use super::model::GreetingResponse;
use crate::core::{FunctionResponse, HandlerError};

/// 未提供名字时的占位
pub const DEFAULT_NAME: &str = "World";

pub fn greet(name: Option<&str>) -> GreetingResponse {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NAME);
    GreetingResponse {
        message: format!("Hello, {}!333", name),
    }
}

/// 按单值参数表读取查询串，重复的 `name` 取最后一个，不会拒绝请求
pub async fn hello(Query(params): Query<HashMap<String, String>>) -> FunctionResponse {
    let greeting = greet(params.get("name").map(String::as_str));
    FunctionResponse::json(&greeting)
        .map_err(HandlerError::from)
        .unwrap_or_else(FunctionResponse::from)
}
