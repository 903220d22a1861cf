use jpashop::core::{
    api::salvo_config::get_salvo_service, database::db::establish_connection,
    env::app_env::AppEnv,
};
use salvo::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let env = AppEnv::new()?;
    let pool = establish_connection(&env)?;
    let http_addr = format!("0.0.0.0:{}", env.app_port);

    let acceptor = TcpListener::new(http_addr).bind().await;
    let server = Server::new(acceptor);
    let handle = server.handle();

    // Graceful shutdown handler
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Signal received, shutting down gracefully...");
                handle.stop_graceful(None);
            }
            Err(err) => tracing::error!("Failed to listen for ctrl_c: {}", err),
        }
    });

    server.serve(get_salvo_service(pool)).await;

    Ok(())
}
