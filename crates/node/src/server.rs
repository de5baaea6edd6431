use std::net::SocketAddr;

use axum::Router;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info};

use crate::error::{Error, Result};

/// Plain HTTP server for the exchange API.
pub struct SdxServer {
    listen_addr: SocketAddr,
    shutdown_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl SdxServer {
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            shutdown_token: CancellationToken::new(),
            task_tracker: TaskTracker::new(),
        }
    }

    /// Bind and serve `router` until [`SdxServer::shutdown`] is called.
    pub async fn start(&self, router: Router) -> Result<JoinHandle<()>> {
        if self.task_tracker.is_closed() {
            return Err(Error::AlreadyStarted);
        }

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(Error::Bind)?;
        let shutdown_token = self.shutdown_token.clone();

        let handle = self.task_tracker.spawn(async move {
            let result = axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
                .await;

            if let Err(e) = result {
                error!("http server exited: {e}");
            }
        });

        self.task_tracker.close();

        Ok(handle)
    }

    pub async fn shutdown(&self) {
        info!("http server shutting down...");

        self.shutdown_token.cancel();
        self.task_tracker.wait().await;

        info!("http server shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_once_then_shutdown() {
        let server = SdxServer::new(SocketAddr::from(([127, 0, 0, 1], 0)));

        let handle = server.start(Router::new()).await.unwrap();
        assert!(matches!(
            server.start(Router::new()).await,
            Err(Error::AlreadyStarted)
        ));

        server.shutdown().await;
        handle.await.unwrap();
    }
}
