use std::sync::Arc;

use http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

/// The uniform wire shape of every API response body
///
/// Serializes to `{"data": …}` on success or `{"errors": […]}` on failure.
/// Exactly one side is ever populated; the enum makes the exclusivity
/// structural rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        data: Value,
    },
    Failure {
        errors: Vec<String>,
    },
}

impl Envelope {
    /// Wrap a success payload; `data` may be JSON null
    pub const fn success(data: Value) -> Self {
        Self::Success { data }
    }

    /// Wrap user-facing error messages
    ///
    /// Current mappings emit a single message; the list shape is the wire
    /// contract so multi-message payloads remain representable.
    pub fn failure(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty(), "error envelope requires at least one message");
        Self::Failure { errors }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors,
        }
    }
}

/// Success payload shapes the builder distinguishes
///
/// A `Value` is wrapped as-is; an `Entity` is projected once when a policy
/// is supplied; a `Collection` is projected element-wise. Entity and
/// collection are not interchangeable: a collection-shaped payload still
/// needs per-element field selection.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Plain structured value, wrapped directly
    Value(Value),
    /// Single domain entity
    Entity(Value),
    /// Ordered sequence of domain entities
    Collection(Vec<Value>),
}

/// Per-field serialization rule selecting which entity fields appear
pub trait ProjectionPolicy: Send + Sync {
    /// Project one entity under the caller-supplied view context
    fn project(&self, entity: &Value, view: &Map<String, Value>) -> Value;
}

/// Projection that keeps a fixed set of object fields
///
/// Non-object values pass through untouched. The view context's `include`
/// array names related fields to keep in addition to the base set.
#[derive(Debug, Clone)]
pub struct FieldProjection {
    fields: Vec<String>,
}

impl FieldProjection {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProjectionPolicy for FieldProjection {
    fn project(&self, entity: &Value, view: &Map<String, Value>) -> Value {
        let Value::Object(object) = entity else {
            return entity.clone();
        };

        let included = view
            .get("include")
            .and_then(Value::as_array)
            .map(|extra| extra.iter().filter_map(Value::as_str).collect::<Vec<_>>())
            .unwrap_or_default();

        let projected: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| {
                self.fields.iter().any(|field| field == *key) || included.contains(&key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Value::Object(projected)
    }
}

/// Explicit per-render configuration
///
/// Replaces keyword-argument style render calls: each field has exactly one
/// effect. `status` is the caller-chosen success status; `projection`
/// selects fields when present; `view` is passed through to the projection
/// step unmodified and never affects status or envelope shape.
#[derive(Clone)]
pub struct RenderOptions {
    pub status: StatusCode,
    pub projection: Option<Arc<dyn ProjectionPolicy>>,
    pub view: Map<String, Value>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            projection: None,
            view: Map::new(),
        }
    }
}

impl RenderOptions {
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn projecting(mut self, policy: impl ProjectionPolicy + 'static) -> Self {
        self.projection = Some(Arc::new(policy));
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: Map<String, Value>) -> Self {
        self.view = view;
        self
    }
}

/// Build the success envelope for a payload
///
/// Applies the projection policy once to an entity, element-wise to a
/// collection (preserving input order), and never to a plain value.
pub fn build_success(payload: Payload, options: &RenderOptions) -> Envelope {
    let data = match payload {
        Payload::Value(value) => value,
        Payload::Entity(entity) => match options.projection.as_ref() {
            Some(policy) => policy.project(&entity, &options.view),
            None => entity,
        },
        Payload::Collection(items) => match options.projection.as_ref() {
            Some(policy) => Value::Array(
                items
                    .iter()
                    .map(|item| policy.project(item, &options.view))
                    .collect(),
            ),
            None => Value::Array(items),
        },
    };

    Envelope::success(data)
}
