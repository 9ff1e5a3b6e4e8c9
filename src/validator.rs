use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use gatekeeper_core::AppError;

/// A request body schema with a stable field order.
///
/// Only the first violation is reported, and "first" follows `FIELDS`.
/// Keys outside the schema rank after every field rule.
pub trait Schema {
    const NAME: &'static str;
    const FIELDS: &'static [&'static str];

    /// First key in the body that the schema does not declare.
    fn unknown_field(&self) -> Option<&str> {
        None
    }
}

/// Picks the message of the first failing field in `order`.
///
/// Fields missing from `order` are considered after the listed ones.
pub fn first_error(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    let field = order
        .iter()
        .copied()
        .find(|field| field_errors.contains_key(*field))
        .or_else(|| {
            let mut rest: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
            rest.sort_unstable();
            rest.into_iter().next()
        });

    let Some(field) = field else {
        return "Invalid request body".to_string();
    };

    field_errors
        .get(field)
        .and_then(|errors| errors.first())
        .and_then(|error| error.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| format!("{} is invalid", field))
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// JSON body extractor that validates against a [`Schema`] before the
/// handler runs. Any failure ends the request with a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Schema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate().map_err(|errors| {
            let message = first_error(&errors, T::FIELDS);
            debug!(schema = T::NAME, error = %message, "Request body rejected");
            AppError::bad_request(anyhow!("{}", message))
        })?;

        if let Some(field) = value.unknown_field() {
            debug!(schema = T::NAME, field, "Request body carries an undeclared key");
            return Err(AppError::bad_request(anyhow!("{} is not allowed", field)));
        }

        Ok(ValidatedJson(value))
    }
}
