//! GraphQL surface for `PdfFormate` records.
//!
//! `POST /graphql` executes operations, `GET /graphql` serves GraphiQL.

mod error;
mod schema;
mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use formate_core::PdfFormatService;

use crate::state::AppState;

pub use schema::{MutationRoot, QueryRoot};
pub use types::{CreatePdfFormateInput, PdfFormateObject, UpdatePdfFormateInput};

/// The executable schema type.
pub type FormateSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `service` available to every resolver.
pub fn build_schema(service: Arc<PdfFormatService>) -> FormateSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Execute a GraphQL request.
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL playground.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
