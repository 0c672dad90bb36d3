// ==========================================
// 计算服务选型助手 - 规则来源
// ==========================================
// 职责: 从文件 / HTTP / 内存取得原始规则文档
// 说明: 来源只负责取回文本,解析统一由 rules::parse 完成
// ==========================================

use crate::rules::error::{RuleStoreError, RuleStoreResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 规则来源 trait
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// 取回原始规则文档
    async fn fetch(&self) -> RuleStoreResult<String>;

    /// 来源描述（日志 / 健康检查使用）
    fn describe(&self) -> String;
}

// ==========================================
// FileRuleSource - 本地文件
// ==========================================
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RuleSource for FileRuleSource {
    async fn fetch(&self) -> RuleStoreResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RuleStoreError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

// ==========================================
// InlineRuleSource - 内存文档（测试 / 内置规则）
// ==========================================
#[derive(Debug, Clone)]
pub struct InlineRuleSource {
    document: String,
}

impl InlineRuleSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl RuleSource for InlineRuleSource {
    async fn fetch(&self) -> RuleStoreResult<String> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "inline".to_string()
    }
}

// ==========================================
// HttpRuleSource - HTTP 拉取
// ==========================================
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct HttpRuleSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "server")]
impl HttpRuleSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "server")]
#[async_trait]
impl RuleSource for HttpRuleSource {
    async fn fetch(&self) -> RuleStoreResult<String> {
        let http_err = |message: String| RuleStoreError::Http {
            url: self.url.clone(),
            message,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| http_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_err(format!("HTTP 状态码 {}", status)));
        }

        response.text().await.map_err(|e| http_err(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}
