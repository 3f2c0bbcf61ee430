use std::process::ExitCode;

use listshare_client::{
    ApiClient, Config,
    api::operations::{ListOperations, UserOperations},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> listshare_client::Result<()> {
    // 加载配置
    let config = Config::from_env()?;
    tracing::info!("Using API at {}", config.base_url);

    let client = ApiClient::connect(config).await?;
    let session = client.session().clone();

    // 已有会话则直接复用，否则用环境变量中的账号登录
    if !session.current().is_logged_in() && session.current().record.refresh_token.is_none() {
        let username = std::env::var("LISTSHARE_USERNAME")
            .map_err(|_| listshare_client::Error::Config("LISTSHARE_USERNAME 未设置".into()))?;
        let password = std::env::var("LISTSHARE_PASSWORD")
            .map_err(|_| listshare_client::Error::Config("LISTSHARE_PASSWORD 未设置".into()))?;
        session.login(&username, &password).await?;
    }

    let user = UserOperations::current_user(&client).await?;
    tracing::info!("Logged in as {}", user.username);

    for list in ListOperations::list_lists(&client).await? {
        let role = if session.current().scopes.can_admin_list(list.id) {
            "admin"
        } else {
            "member"
        };
        println!("{:>6}  {:<32} {}", list.id, list.name, role);
    }

    if std::env::args().any(|arg| arg == "--logout") {
        session.logout().await?;
        tracing::info!("Session cleared");
    }

    Ok(())
}
