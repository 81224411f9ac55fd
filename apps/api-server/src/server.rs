//! HTTP server lifecycle.
//!
//! [`BlogServer`] owns a running actix-web server. It is started explicitly
//! and stopped explicitly, so callers (the binary, the integration tests)
//! control exactly when it is listening.

use std::io;
use std::net::{SocketAddr, TcpListener};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// A running blog API server.
pub struct BlogServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
}

impl BlogServer {
    /// Serve `state` on an already-bound listener.
    ///
    /// Must be called from within an actix/tokio runtime.
    pub fn start(state: AppState, listener: TcpListener, workers: usize) -> io::Result<Self> {
        let addr = listener.local_addr()?;

        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(state.clone()))
                .app_data(handlers::json_config())
                .configure(handlers::configure_routes)
                .default_service(web::to(handlers::not_found))
        })
        .workers(workers.max(1))
        .listen(listener)?
        .run();

        let handle = server.handle();
        let task = actix_rt::spawn(server);

        tracing::info!(%addr, workers, "HTTP server listening");
        Ok(Self { addr, handle, task })
    }

    /// Bind `host:port` and serve. Port 0 picks a free port.
    pub fn bind(state: AppState, host: &str, port: u16, workers: usize) -> io::Result<Self> {
        let listener = TcpListener::bind((host, port))?;
        Self::start(state, listener, workers)
    }

    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Gracefully stop accepting connections and wait for in-flight requests.
    pub async fn stop(self) -> io::Result<()> {
        tracing::info!(addr = %self.addr, "Stopping HTTP server");
        self.handle.stop(true).await;
        self.wait().await
    }

    /// Wait until the server exits (e.g. on SIGINT).
    pub async fn wait(self) -> io::Result<()> {
        self.task.await.map_err(io::Error::other)?
    }
}
