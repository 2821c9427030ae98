use thiserror::Error;

/// A failure raised by endpoint logic, as a closed union
///
/// Endpoints construct the first two variants for conditions they can
/// recognize. Everything else enters through the `Unhandled` variant,
/// which is the single adapter point for external error types
/// (`From<anyhow::Error>`), so the classifier never depends on any
/// collaborator's error hierarchy.
#[derive(Debug, Error)]
pub enum Failure {
    /// A required request parameter was absent
    #[error("required parameter missing: {name}")]
    MissingParameter { name: String },

    /// The referenced resource does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any failure not recognized by endpoint logic
    #[error(transparent)]
    Unhandled(#[from] anyhow::Error),
}

impl Failure {
    /// A required request parameter was absent
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// The referenced resource does not exist
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Adapt an arbitrary collaborator error into the union
    pub fn unhandled(error: impl Into<anyhow::Error>) -> Self {
        Self::Unhandled(error.into())
    }

    /// The classification tag for this failure
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::MissingParameter { .. } => FailureKind::MissingParameter,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::Unhandled(_) => FailureKind::Unhandled,
        }
    }

    /// Render the originating-cause trace for diagnostics
    ///
    /// For `Unhandled` this is anyhow's debug rendering (cause chain plus
    /// backtrace when captured); for typed variants it walks the standard
    /// error source chain.
    pub fn trace(&self) -> String {
        match self {
            Self::Unhandled(error) => format!("{error:?}"),
            other => {
                let mut rendered = other.to_string();
                let mut source = std::error::Error::source(other);
                while let Some(cause) = source {
                    rendered.push_str("\ncaused by: ");
                    rendered.push_str(&cause.to_string());
                    source = cause.source();
                }
                rendered
            }
        }
    }
}

/// Tag identifying a class of failure
///
/// The set is closed; the classifier table is extended by registering new
/// mappings, not by adding variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    MissingParameter,
    NotFound,
    Unhandled,
}
