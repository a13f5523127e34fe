use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQLRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::Result;

use super::schema::HolonetSchema;

/// Single endpoint: GET serves the playground, POST executes queries.
pub fn router(schema: HolonetSchema) -> Router {
    Router::new()
        .route("/graphql", get(playground).post(graphql))
        .with_state(schema)
}

pub async fn run_server(schema: HolonetSchema, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}

async fn playground() -> impl IntoResponse {
    tracing::info!("Got request for the playground, sending GUI back");
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql(State(schema): State<HolonetSchema>, request: GraphQLRequest) -> impl IntoResponse {
    execute(schema, request.into_inner()).await
}

/// Responses carrying errors map to 400; not-found lookups are null data
/// with no errors and stay 200.
async fn execute(
    schema: HolonetSchema,
    request: async_graphql::Request,
) -> (StatusCode, Json<async_graphql::Response>) {
    let response = schema.execute(request).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        tracing::error!(errors = ?response.errors, "GraphQL errors");
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}
