//! Server lifecycle - start listening, stop, release the store.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use blog_core::ports::BlogPostRepository;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Errors raised while starting or stopping the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Database initialization failed: {0}")]
    Database(String),

    #[error("Server task failed: {0}")]
    Task(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A listening server. Dropping it does not stop the server; call
/// [`RunningServer::close`].
pub struct RunningServer {
    addr: SocketAddr,
    state: AppState,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
}

/// Build the application state and start serving.
///
/// Resolves once the socket is bound. Must be called from within an actix
/// system (`#[actix_web::main]`, `#[actix_rt::test]`).
pub async fn run_server(config: &AppConfig) -> Result<RunningServer, ServerError> {
    let state = AppState::connect(config.database.as_ref()).await?;
    serve(config, state)
}

/// Start serving an already-built state.
pub fn serve(config: &AppConfig, state: AppState) -> Result<RunningServer, ServerError> {
    let app_state = state.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(handlers::configure_routes)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((config.host.as_str(), config.port))
        .map_err(|source| ServerError::Bind {
            address: config.bind_address(),
            source,
        })?;
    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| ServerError::Task("no listening address".to_string()))?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    tracing::info!(%addr, store = state.store_kind(), "Blog API listening");

    Ok(RunningServer {
        addr,
        state,
        handle,
        task,
    })
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// The store the server reads and writes.
    pub fn posts(&self) -> Arc<dyn BlogPostRepository> {
        self.state.posts.clone()
    }

    /// Stop accepting connections, finish in-flight requests, then release
    /// the store.
    pub async fn close(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, "Stopping server");
        self.handle.stop(true).await;
        self.finish().await
    }

    /// Wait until the server stops on its own (e.g. SIGINT), then release
    /// the store.
    pub async fn wait(self) -> Result<(), ServerError> {
        self.finish().await
    }

    async fn finish(self) -> Result<(), ServerError> {
        join_then_release(self.task, self.state.close()).await
    }
}

/// Await the server task, then run `release` even if the task failed.
async fn join_then_release<F>(
    task: JoinHandle<io::Result<()>>,
    release: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    let joined = task.await;
    release.await;
    tracing::info!("Server stopped");

    let result = joined.map_err(|e| ServerError::Task(e.to_string()))?;
    Ok(result?)
}
