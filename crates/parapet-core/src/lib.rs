#![allow(clippy::must_use_candidate)]

//! The request/response contract layer shared by every API endpoint
//!
//! Three pieces, composed around each request: the admission gate decides
//! whether a request enters the JSON pipeline at all, the error classifier
//! maps every failure onto a stable wire format, and the envelope builder
//! normalizes success payloads into the `{data}` / `{errors}` shape.
//! Everything here is framework-free; the server crate wires it into axum.

pub mod admission;
pub mod classify;
pub mod envelope;
pub mod failure;
pub mod sort;

pub use admission::{AdmissionDecision, AdmissionMode, ResponseFormat, admit, negotiated_format};
pub use classify::{Classifier, ErrorMapping, StandardMessages};
pub use envelope::{Envelope, FieldProjection, Payload, ProjectionPolicy, RenderOptions, build_success};
pub use failure::{Failure, FailureKind};
pub use sort::{SortDirection, SortSpec, validate_sort};
