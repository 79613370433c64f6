//! 用户数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// 用户列表响应，耗时格式为 `"12.34ms"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<User>,
    #[serde(rename = "connection_time_ms")]
    pub connection_time: String,
    #[serde(rename = "query_time_ms")]
    pub query_time: String,
}
