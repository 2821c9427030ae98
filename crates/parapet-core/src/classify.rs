use http::StatusCode;

use crate::envelope::Envelope;
use crate::failure::{Failure, FailureKind};

/// One row of the classification table
#[derive(Debug, Clone)]
pub struct ErrorMapping {
    /// Failure class this mapping answers for
    pub kind: FailureKind,
    /// Status code placed on the wire
    pub status: StatusCode,
    /// User-facing message placed in the error envelope
    pub message: String,
}

/// Matcher deciding whether a mapping applies to a failure
pub type Predicate = fn(&Failure) -> bool;

/// The user-facing message strings of the standard table
///
/// Loaded from external configuration once at startup; this layer only
/// reads them.
#[derive(Debug, Clone)]
pub struct StandardMessages {
    pub missing_params: String,
    pub not_found: String,
    pub server_error: String,
}

/// Ordered failure-to-wire mapping table
///
/// Entries are evaluated in registration order, most specific first. The
/// catch-all is a dedicated field rather than a list entry: the table
/// cannot be constructed without one, and it is always evaluated last.
/// Ordered ahead of a specific entry it would match everything and make
/// that entry unreachable.
pub struct Classifier {
    entries: Vec<(Predicate, ErrorMapping)>,
    catch_all: ErrorMapping,
}

impl Classifier {
    /// Start a table holding only the always-matching fallback
    pub const fn new(catch_all: ErrorMapping) -> Self {
        Self {
            entries: Vec::new(),
            catch_all,
        }
    }

    /// Register a mapping after all previously registered ones
    #[must_use]
    pub fn with_mapping(mut self, predicate: Predicate, mapping: ErrorMapping) -> Self {
        self.entries.push((predicate, mapping));
        self
    }

    /// The required table: missing parameter, not found, then catch-all
    pub fn standard(messages: StandardMessages) -> Self {
        Self::new(ErrorMapping {
            kind: FailureKind::Unhandled,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: messages.server_error,
        })
        .with_mapping(
            |failure| matches!(failure, Failure::MissingParameter { .. }),
            ErrorMapping {
                kind: FailureKind::MissingParameter,
                status: StatusCode::BAD_REQUEST,
                message: messages.missing_params,
            },
        )
        .with_mapping(
            |failure| matches!(failure, Failure::NotFound { .. }),
            ErrorMapping {
                kind: FailureKind::NotFound,
                status: StatusCode::NOT_FOUND,
                message: messages.not_found,
            },
        )
    }

    /// Select the mapping for a failure; total, first match wins
    pub fn classify(&self, failure: &Failure) -> &ErrorMapping {
        self.entries
            .iter()
            .find(|(predicate, _)| predicate(failure))
            .map_or(&self.catch_all, |(_, mapping)| mapping)
    }

    /// Classify, record the diagnostic, and build the error envelope
    ///
    /// This is the only place failures are observed: one log event per
    /// failure, carrying the human-readable message and the originating
    /// cause trace, emitted before the envelope is constructed. The
    /// internal message never reaches the wire; only the mapping's
    /// configured message does.
    pub fn handle(&self, failure: &Failure) -> (StatusCode, Envelope) {
        let mapping = self.classify(failure);

        tracing::error!(
            kind = %mapping.kind,
            error = %failure,
            trace = %failure.trace(),
            "request failed"
        );

        (mapping.status, Envelope::failure(vec![mapping.message.clone()]))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    fn table() -> Classifier {
        Classifier::standard(StandardMessages {
            missing_params: "Missing required parameters".to_owned(),
            not_found: "Resource not found".to_owned(),
            server_error: "Something went wrong".to_owned(),
        })
    }

    #[test]
    fn every_failure_classifies_to_exactly_one_mapping() {
        let classifier = table();

        let failures = [
            Failure::missing_parameter("name"),
            Failure::not_found("widget"),
            Failure::unhandled(anyhow::anyhow!("boom")),
        ];

        for failure in &failures {
            let mapping = classifier.classify(failure);
            assert_eq!(mapping.kind, failure.kind());
        }
    }

    #[test]
    fn specific_mappings_beat_the_catch_all() {
        let classifier = table();

        let missing = classifier.classify(&Failure::missing_parameter("name"));
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.message, "Missing required parameters");

        let absent = classifier.classify(&Failure::not_found("widget"));
        assert_eq!(absent.status, StatusCode::NOT_FOUND);
        assert_eq!(absent.message, "Resource not found");
    }

    #[test]
    fn unrecognized_failures_hit_the_catch_all() {
        let classifier = table();
        let mapping = classifier.classify(&Failure::unhandled(anyhow::anyhow!("division by zero")));
        assert_eq!(mapping.kind, FailureKind::Unhandled);
        assert_eq!(mapping.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn registered_mappings_stay_ahead_of_the_catch_all() {
        // A narrower predicate over the same variant space: registered
        // entries win over the fallback even for Unhandled failures.
        let classifier = table().with_mapping(
            |failure| failure.to_string().contains("quota"),
            ErrorMapping {
                kind: FailureKind::Unhandled,
                status: StatusCode::TOO_MANY_REQUESTS,
                message: "Over quota".to_owned(),
            },
        );

        let mapping = classifier.classify(&Failure::unhandled(anyhow::anyhow!("quota exceeded")));
        assert_eq!(mapping.status, StatusCode::TOO_MANY_REQUESTS);

        let other = classifier.classify(&Failure::unhandled(anyhow::anyhow!("boom")));
        assert_eq!(other.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn handle_builds_the_error_envelope() {
        let classifier = table();
        let (status, envelope) = classifier.handle(&Failure::not_found("widget"));

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.errors(), ["Resource not found"]);
        assert!(envelope.data().is_none());
    }

    #[test]
    fn handle_never_leaks_the_internal_message() {
        let classifier = table();
        let (_, envelope) = classifier.handle(&Failure::unhandled(anyhow::anyhow!("division by zero")));
        assert_eq!(envelope.errors(), ["Something went wrong"]);
    }

    // Captures each event's fields as one rendered line.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            struct Render(String);

            impl tracing::field::Visit for Render {
                fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                    use std::fmt::Write;
                    let _ = write!(self.0, "{}={value:?} ", field.name());
                }
            }

            let mut rendered = Render(String::new());
            event.record(&mut rendered);
            self.events.lock().unwrap().push(rendered.0);
        }
    }

    #[test]
    fn handle_logs_exactly_once_with_message_and_trace() {
        let capture = CaptureLayer::default();
        let events = Arc::clone(&capture.events);
        let subscriber = tracing_subscriber::registry().with(capture);

        tracing::subscriber::with_default(subscriber, || {
            table().handle(&Failure::unhandled(anyhow::anyhow!("division by zero")));
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("division by zero"));
        assert!(events[0].contains("trace="));
    }
}
