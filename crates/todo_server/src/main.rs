//! Todo server entry point.

use dotenv_flow::dotenv_flow;
use log::info;
use std::error::Error;
use todo_core::init_logging;
use todo_server::{app, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv_flow().ok();

    let config = ServerConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("event=server_start module=server status=ok addr={addr}");
    println!("todo-server listening on http://{addr}");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
