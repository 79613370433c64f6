//! 本地 HTTP 宿主：按平台的函数路径挂载各个函数

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::app::{
    greeting,
    keep_alive::{self, KeepAlive, Pinger},
    products::{self, ProductService, ProductStore},
    users::{self, UserService, UserStore},
};
use crate::config::FunctionsConfig;
use crate::core::middleware::request_logging_middleware;

pub const PRODUCTS_PATH: &str = "/.netlify/functions/get-products";
pub const USERS_PATH: &str = "/.netlify/functions/get-users";
pub const HELLO_PATH: &str = "/.netlify/functions/hello";
pub const KEEP_ALIVE_PATH: &str = "/.netlify/functions/keep-alive";
pub const HEALTH_PATH: &str = "/health";

/// 各函数的数据访问实现
pub struct Backends<P, U, K> {
    pub products: P,
    pub users: U,
    pub pinger: K,
}

/// 组装好的函数集合
pub struct Functions<P, U, K> {
    pub products: Arc<ProductService<P>>,
    pub users: Arc<UserService<U>>,
    pub keep_alive: Arc<KeepAlive<K>>,
}

impl<P, U, K> Functions<P, U, K>
where
    P: ProductStore + 'static,
    U: UserStore + 'static,
    K: Pinger + 'static,
{
    pub fn new(config: &FunctionsConfig, backends: Backends<P, U, K>) -> Self {
        Self {
            products: Arc::new(ProductService::new(config.products.clone(), backends.products)),
            users: Arc::new(UserService::new(config.users.clone(), backends.users)),
            keep_alive: Arc::new(KeepAlive::new(config.keep_alive.clone(), backends.pinger)),
        }
    }

    pub fn router(&self) -> Router {
        let products = Router::new()
            .route(PRODUCTS_PATH, get(products::handler::get_products::<P>))
            .with_state(self.products.clone());
        let users = Router::new()
            .route(USERS_PATH, get(users::handler::get_users::<U>))
            .with_state(self.users.clone());
        let keep_alive = Router::new()
            .route(KEEP_ALIVE_PATH, post(keep_alive::handler::trigger::<K>))
            .with_state(self.keep_alive.clone());

        Router::new()
            .route(HEALTH_PATH, get(health))
            .route(HELLO_PATH, get(greeting::handler::hello))
            .merge(products)
            .merge(users)
            .merge(keep_alive)
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
    }
}

/// 存活探针
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
