//! A sample widgets resource exercising the contract layer end to end

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Json, Router};
use parapet_core::{Failure, FieldProjection, Payload, RenderOptions, SortDirection, validate_sort};
use parapet_server::ApiContext;
use serde_json::{Value, json};

fn widgets() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "anchor", "price": 25}),
        json!({"id": 2, "name": "bolt", "price": 5}),
        json!({"id": 3, "name": "clamp", "price": 12}),
    ]
}

fn compare(left: &Value, right: &Value) -> std::cmp::Ordering {
    match (left.as_i64(), right.as_i64()) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => left
            .as_str()
            .unwrap_or_default()
            .cmp(right.as_str().unwrap_or_default()),
    }
}

/// List widgets: client-driven ordering plus field projection
async fn list_widgets(
    Query(params): Query<HashMap<String, String>>,
    Extension(api): Extension<ApiContext>,
) -> Response {
    let mut items = widgets();

    if let Some(sort) = validate_sort(&params, &["name", "price"]) {
        items.sort_by(|a, b| {
            let ordering = compare(&a[sort.column.as_str()], &b[sort.column.as_str()]);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let options = RenderOptions::default().projecting(FieldProjection::new(["id", "name"]));
    let rendered = api.render(Payload::Collection(items), &options);
    api.respond(Ok(rendered))
}

/// Fetch one widget, unprojected
async fn show_widget(Path(id): Path<u64>, Extension(api): Extension<ApiContext>) -> Response {
    let result = widgets()
        .into_iter()
        .find(|widget| widget["id"] == id)
        .map(|widget| api.render(Payload::Entity(widget), &RenderOptions::default()))
        .ok_or_else(|| Failure::not_found("widget"));

    api.respond(result)
}

/// Create a widget; `name` is required
async fn create_widget(Extension(api): Extension<ApiContext>, Json(body): Json<Value>) -> Response {
    let result = body
        .get("name")
        .and_then(Value::as_str)
        .map(|name| {
            let widget = json!({"id": 4, "name": name});
            api.render(
                Payload::Entity(widget),
                &RenderOptions::with_status(StatusCode::CREATED),
            )
        })
        .ok_or_else(|| Failure::missing_parameter("name"));

    api.respond(result)
}

/// An endpoint whose collaborator fails in an unrecognized way
async fn broken(Extension(api): Extension<ApiContext>) -> Response {
    api.respond(Err(Failure::unhandled(anyhow::anyhow!("division by zero"))))
}

/// An endpoint that panics outright
async fn explode() -> Response {
    panic!("unexpected widget state");
}

/// The sample resource router the harness mounts behind the gate
pub fn router() -> Router {
    Router::new()
        .route("/api/v1/widgets", get(list_widgets).post(create_widget))
        .route("/api/v1/widgets/{id}", get(show_widget))
        .route("/api/v1/broken", get(broken))
        .route("/api/v1/explode", get(explode))
}
