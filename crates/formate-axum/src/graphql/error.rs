//! Mapping from core errors to GraphQL errors.
//!
//! Every error carries an `extensions.code`: `BAD_USER_INPUT`,
//! `NOT_FOUND` or `INTERNAL`.

use async_graphql::{Error, ErrorExtensions};
use formate_core::{CoreError, ValidationErrors};

pub(crate) fn to_graphql_error(err: CoreError) -> Error {
    match err {
        CoreError::Validation(violations) => validation_error(&violations),
        e if e.is_not_found() => Error::new(e.to_string()).extend_with(|_, ext| {
            ext.set("code", "NOT_FOUND");
        }),
        e => {
            tracing::error!(error = %e, "GraphQL resolver failed");
            Error::new(e.to_string()).extend_with(|_, ext| {
                ext.set("code", "INTERNAL");
            })
        }
    }
}

fn validation_error(errors: &ValidationErrors) -> Error {
    let violations = async_graphql::to_value(errors.violations()).unwrap_or(async_graphql::Value::Null);
    Error::new("Validation failed").extend_with(|_, ext| {
        ext.set("code", "BAD_USER_INPUT");
        ext.set("violations", violations);
    })
}
