//! 商品业务服务

use std::future::Future;
use std::time::Instant;

use super::model::{Product, ProductsResponse};
use crate::config::{ProductsSettings, PRODUCTS_DATABASE_URL_VAR};
use crate::core::{FunctionResponse, HandlerError, StoreError};
use crate::infrastructure::database::{self, PgDatabase, Timed};

const LIST_PRODUCTS_SQL: &str =
    "SELECT id::bigint AS id, name, price::float8 AS price FROM products ORDER BY id";

/// 商品数据访问接口
pub trait ProductStore: Send + Sync {
    /// 按 id 升序返回全部商品
    fn list_products(
        &self,
        database_url: &str,
    ) -> impl Future<Output = Result<Timed<Vec<Product>>, StoreError>> + Send;
}

impl ProductStore for PgDatabase {
    async fn list_products(&self, database_url: &str) -> Result<Timed<Vec<Product>>, StoreError> {
        database::fetch_all_timed(database_url, LIST_PRODUCTS_SQL).await
    }
}

#[derive(Clone)]
pub struct ProductService<S> {
    settings: ProductsSettings,
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(settings: ProductsSettings, store: S) -> Self {
        Self { settings, store }
    }

    /// 处理一次调用，任何失败都转换成 500 响应
    pub async fn invoke(&self) -> FunctionResponse {
        self.try_invoke().await.unwrap_or_else(FunctionResponse::from)
    }

    async fn try_invoke(&self) -> Result<FunctionResponse, HandlerError> {
        let started = Instant::now();

        let database_url = self
            .settings
            .database_url
            .as_deref()
            .ok_or(HandlerError::MissingConfig(PRODUCTS_DATABASE_URL_VAR))?;

        // SQL 阶段用本处理器的时钟计时，保证不超过整体耗时
        let sql_started = Instant::now();
        let result = self.store.list_products(database_url).await?;
        let sql_query_time_ms = sql_started.elapsed().as_millis() as i64;
        tracing::debug!(rows = result.rows.len(), sql_query_time_ms, "products fetched");

        if !self.settings.timing {
            return Ok(FunctionResponse::json(&result.rows)?);
        }

        let response = ProductsResponse {
            data: result.rows,
            sql_query_time_ms,
            execution_time_ms: started.elapsed().as_millis() as i64,
        };
        Ok(FunctionResponse::json(&response)?)
    }
}
