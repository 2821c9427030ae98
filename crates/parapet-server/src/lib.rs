#![allow(clippy::must_use_candidate)]

mod admission;
mod api;
mod fallback;
mod health;

use std::net::SocketAddr;

use axum::Router;
use parapet_config::Config;
use parapet_core::AdmissionMode;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use api::{ApiContext, Rendered, api_context_middleware};
pub use fallback::FallbackShell;

/// Assembled server: the contract-layer pipeline wrapped around the
/// caller's endpoint routes
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and the endpoint router
    ///
    /// Pipeline, innermost out: context extension, panic recovery,
    /// admission gate, then the health route (exempt from the gate) and
    /// request tracing.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback shell cannot be loaded
    pub fn new(config: &Config, endpoints: Router) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let context = ApiContext::new(&config.messages);
        let shell = FallbackShell::load(&config.fallback)?;
        let mode = if config.admission.permissive {
            AdmissionMode::Permissive
        } else {
            AdmissionMode::Strict
        };

        let mut app = endpoints;

        // Context extension (innermost, runs just before handlers)
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let context = context.clone();
            async move { api::api_context_middleware(context, req, next).await }
        }));

        // Panic recovery: a panicking handler still answers with the
        // catch-all error envelope instead of a bare 500
        let server_error = config.messages.server_error.clone();
        app = app.layer(CatchPanicLayer::custom(
            move |panic: Box<dyn std::any::Any + Send + 'static>| {
                api::panic_response(&server_error, panic.as_ref())
            },
        ));

        // Admission gate: short-circuits to the shell before endpoint logic
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let shell = shell.clone();
            async move { admission::admission_middleware(mode, shell, req, next).await }
        }));

        // Health check sits outside the gate
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
