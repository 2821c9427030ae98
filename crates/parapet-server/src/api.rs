use std::sync::Arc;

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use parapet_config::MessageCatalog;
use parapet_core::{
    Classifier, Envelope, Failure, FailureKind, Payload, RenderOptions, StandardMessages, build_success,
};

/// The contract-layer state every handler renders through
///
/// Wraps the classifier table, built once at startup from the message
/// catalog and read-only thereafter; cloning shares it.
#[derive(Clone)]
pub struct ApiContext {
    classifier: Arc<Classifier>,
}

impl ApiContext {
    /// Build the standard classification table from the message catalog
    pub fn new(messages: &MessageCatalog) -> Self {
        let classifier = Classifier::standard(StandardMessages {
            missing_params: messages.missing_params.clone(),
            not_found: messages.not_found.clone(),
            server_error: messages.server_error.clone(),
        });

        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Build a success response under the caller's render options
    pub fn render(&self, payload: Payload, options: &RenderOptions) -> Rendered {
        Rendered {
            status: options.status,
            envelope: build_success(payload, options),
        }
    }

    /// Turn an endpoint outcome into the wire response
    pub fn respond(&self, result: Result<Rendered, Failure>) -> Response {
        match result {
            Ok(rendered) => (rendered.status, Json(rendered.envelope)).into_response(),
            Err(failure) => self.failure_response(&failure),
        }
    }

    /// Classify a failure and build its wire response
    pub fn failure_response(&self, failure: &Failure) -> Response {
        let (status, envelope) = self.classifier.handle(failure);
        (status, Json(envelope)).into_response()
    }
}

/// A success response awaiting serialization
pub struct Rendered {
    pub status: StatusCode,
    pub envelope: Envelope,
}

/// Middleware that exposes the `ApiContext` to handlers as an extension
pub async fn api_context_middleware(context: ApiContext, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Response for a panicking handler
///
/// Panics bypass the typed failure path, so this mirrors the catch-all
/// mapping by hand: log the panic payload, answer with the configured
/// server-error message. The payload text never reaches the wire.
pub fn panic_response(server_error: &str, panic: &(dyn std::any::Any + Send)) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("opaque panic payload");

    tracing::error!(kind = %FailureKind::Unhandled, error = detail, "handler panicked");

    let envelope = Envelope::failure(vec![server_error.to_owned()]);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
}
