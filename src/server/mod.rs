// ==========================================
// 计算服务选型助手 - HTTP 服务
// ==========================================
// 职责: axum 服务生命周期（绑定、CORS、优雅停机）
// 说明: 浏览器前端跨域访问,默认放开 CORS
// ==========================================

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::advisor_api::AdvisorApi;
use crate::api::error::{ApiError, ApiResult};
use crate::config::advisor_config::AdvisorConfig;

pub use handlers::{create_router, AppState};

/// 选型助手 HTTP 服务
pub struct AdvisorServer {
    config: AdvisorConfig,
    api: Arc<AdvisorApi>,
}

impl AdvisorServer {
    /// 创建服务实例
    ///
    /// # 参数
    /// - config: 运行配置（创建时校验）
    /// - api: 已装配好的选型 API
    pub fn new(config: AdvisorConfig, api: Arc<AdvisorApi>) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self { config, api })
    }

    /// 监听地址
    pub fn socket_addr(&self) -> ApiResult<SocketAddr> {
        self.config
            .bind_address()
            .parse::<SocketAddr>()
            .map_err(|e| ApiError::InvalidInput(format!("监听地址解析失败: {}", e)))
    }

    pub fn server_url(&self) -> String {
        format!("http://{}", self.config.bind_address())
    }

    /// 完整路由（含 CORS 与请求追踪）
    pub fn router(&self) -> axum::Router {
        create_router()
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(AppState::new(Arc::clone(&self.api)))
    }

    /// 启动服务,收到停机信号后返回
    pub async fn start(&self) -> ApiResult<()> {
        let addr = self.socket_addr()?;

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("绑定地址失败 {}: {:?}", addr, e);
            ApiError::InternalError(format!("绑定地址失败 {}: {}", addr, e))
        })?;

        info!("服务已启动: {}", self.server_url());

        axum::serve(listener, self.router())
            .with_graceful_shutdown(Self::wait_for_shutdown())
            .await
            .map_err(|e| ApiError::InternalError(format!("服务运行错误: {}", e)))?;

        info!("服务已停止");
        Ok(())
    }

    /// 等待停机信号（Ctrl+C / SIGTERM）
    pub async fn wait_for_shutdown() {
        let ctrl_c = async {
            match signal::ctrl_c().await {
                Ok(()) => info!("收到 Ctrl+C,开始停机"),
                Err(e) => {
                    error!("无法监听 Ctrl+C: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(unix)]
        let terminate = async {
            use tokio::signal::unix;
            match unix::signal(unix::SignalKind::terminate()) {
                Ok(mut term) => {
                    term.recv().await;
                    info!("收到 TERM 信号,开始停机");
                }
                Err(e) => {
                    error!("无法监听 TERM 信号: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cost::CostEstimator;
    use crate::engine::orchestrator::RecommendationEngine;
    use crate::rules::store::RuleStore;

    fn api() -> Arc<AdvisorApi> {
        Arc::new(AdvisorApi::new(
            Arc::new(RuleStore::new()),
            RecommendationEngine::default(),
            CostEstimator::default(),
        ))
    }

    #[test]
    fn test_server_socket_addr() {
        let server = AdvisorServer::new(AdvisorConfig::default(), api()).unwrap();
        assert_eq!(server.socket_addr().unwrap().port(), 5000);
        assert_eq!(server.server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let config = AdvisorConfig {
            port: 0,
            ..AdvisorConfig::default()
        };
        assert!(AdvisorServer::new(config, api()).is_err());
    }
}
