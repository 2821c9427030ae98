use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use parapet_core::{AdmissionDecision, AdmissionMode, admit};

use crate::fallback::FallbackShell;

/// Admission gate middleware
///
/// Runs ahead of every endpoint. A request that does not qualify as a
/// programmatic JSON client receives the fallback shell and the handler
/// never executes. Nothing is logged on the rejection path.
pub async fn admission_middleware(
    mode: AdmissionMode,
    shell: FallbackShell,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    match admit(&parts, mode) {
        AdmissionDecision::Proceed => next.run(Request::from_parts(parts, body)).await,
        AdmissionDecision::RenderFallback => Html(shell.document()).into_response(),
    }
}
