//! 商品数据模型

use serde::{Deserialize, Serialize};

/// products 表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// 带耗时信息的商品列表响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub data: Vec<Product>,
    /// 整个处理过程耗时（毫秒）
    pub execution_time_ms: i64,
    /// 连接 + 查询 + 解码耗时（毫秒）
    pub sql_query_time_ms: i64,
}
