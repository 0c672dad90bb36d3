// ==========================================
// 计算服务选型助手 - HTTP 服务主入口
// ==========================================
// 流程: 日志 -> 配置 -> 规则加载（一次） -> 启动 HTTP 服务 -> 优雅停机
// ==========================================

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use compute_advisor::api::AdvisorApi;
    use compute_advisor::config::AdvisorConfig;
    use compute_advisor::rules::RuleStore;
    use compute_advisor::server::AdvisorServer;
    use compute_advisor::{i18n, logging, APP_NAME, VERSION};

    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let config = AdvisorConfig::load()?;
    tracing::info!(rules = ?config.rules, bind = %config.bind_address(), "配置加载完成");

    i18n::set_locale(&config.locale);
    tracing::info!(locale = %i18n::current_locale(), "默认语言已设置");

    // 规则只加载一次; 失败时以空规则继续提供服务
    let rule_store = Arc::new(RuleStore::new());
    let api = AdvisorApi::from_config(&config, Arc::clone(&rule_store))?;
    let status = api.reload().await;
    if let Err(e) = status {
        tracing::warn!("初始规则加载失败,以空规则启动: {}", e);
    }

    let server = AdvisorServer::new(config, Arc::new(api))?;
    server.start().await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    println!("==================================================");
    println!("{}", compute_advisor::APP_NAME);
    println!("系统版本: {}", compute_advisor::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 server 特性");
    println!("使用: cargo run --features server");
    println!();
    println!("或者使用库模式:");
    println!("use compute_advisor::AdvisorApi;");
}
