//! Query and mutation roots.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use formate_core::{CoreError, PdfFormatService};

use super::error::to_graphql_error;
use super::types::{CreatePdfFormateInput, PdfFormateObject, UpdatePdfFormateInput};

fn service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<PdfFormatService>> {
    ctx.data::<Arc<PdfFormatService>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All records, most recently created first.
    async fn pdf_formats(&self, ctx: &Context<'_>) -> Result<Vec<PdfFormateObject>> {
        let records = service(ctx)?.find_all().await.map_err(to_graphql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn pdf_formate(&self, ctx: &Context<'_>, id: String) -> Result<PdfFormateObject> {
        let record = service(ctx)?.find_one(&id).await.map_err(to_graphql_error)?;
        Ok(record.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_pdf_formate(
        &self,
        ctx: &Context<'_>,
        create_pdf_formate_input: CreatePdfFormateInput,
    ) -> Result<PdfFormateObject> {
        let new = create_pdf_formate_input
            .validate()
            .map_err(|e| to_graphql_error(CoreError::from(e)))?;

        let record = service(ctx)?.create(new).await.map_err(to_graphql_error)?;
        tracing::info!(id = %record.id, "Created PdfFormate");
        Ok(record.into())
    }

    /// Overlay the provided fields onto the record named by `id`.
    async fn update_pdf_formate(
        &self,
        ctx: &Context<'_>,
        update_pdf_formate_input: UpdatePdfFormateInput,
    ) -> Result<PdfFormateObject> {
        let (id, update) = update_pdf_formate_input
            .validate()
            .map_err(|e| to_graphql_error(CoreError::from(e)))?;

        let record = service(ctx)?
            .update(&id, update)
            .await
            .map_err(to_graphql_error)?;
        Ok(record.into())
    }

    /// Delete a record and return its last state.
    async fn remove_pdf_formate(&self, ctx: &Context<'_>, id: String) -> Result<PdfFormateObject> {
        let record = service(ctx)?.remove(&id).await.map_err(to_graphql_error)?;
        tracing::info!(id = %record.id, "Removed PdfFormate");
        Ok(record.into())
    }
}
