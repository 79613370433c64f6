//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// 请求日志中间件
///
/// 每个调用分配一个请求 ID，记录方法、路径、状态码与耗时。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let span = tracing::info_span!("invocation", %request_id, %method, %path);
    let response = next.run(req).instrument(span).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        warn!(
            %request_id,
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            path,
            status,
            duration.as_millis(),
            user_agent
        );
    } else {
        info!(
            %request_id,
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            path,
            status,
            duration.as_millis(),
            user_agent
        );
    }

    response
}
