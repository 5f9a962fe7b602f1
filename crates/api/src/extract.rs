//! Request extractors shared by the handlers.

use std::borrow::Cow;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use gigboard_core::fields::FieldMap;
use gigboard_core::types::DbId;
use serde_json::Value;

use crate::error::AppError;

/// A record id taken from the `{id}` path segment.
///
/// A segment that is not an integer becomes a 400 with the standard
/// `{"errors": [...]}` body instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(id))
    }
}

/// Raw key/value fields of a create or update request.
///
/// Accepts `application/x-www-form-urlencoded` bodies (every value arrives
/// as a string) and `application/json` objects. A request with neither a
/// content type nor a body carries no fields. Validation of the keys and
/// values is left to the domain layer.
#[derive(Debug, Clone)]
pub struct FieldInput(pub FieldMap);

enum BodyKind {
    Json,
    Form,
    Unspecified,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req.headers().get(CONTENT_TYPE) else {
        return BodyKind::Unspecified;
    };
    let content_type = content_type.to_str().unwrap_or_default();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

fn unsupported_body() -> AppError {
    AppError::BadRequest("Expected a form-encoded or JSON request body".to_string())
}

/// Decode one `application/x-www-form-urlencoded` key or value.
fn decode_form_component(raw: &str) -> Result<String, AppError> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(Cow::into_owned)
        .map_err(|_| AppError::BadRequest("form body is not valid UTF-8".to_string()))
}

/// Parse a form body, rejecting percent-escapes that do not decode to UTF-8.
/// A repeated key keeps its last value.
fn parse_form(body: &[u8]) -> Result<FieldMap, AppError> {
    let body = std::str::from_utf8(body)
        .map_err(|_| AppError::BadRequest("form body is not valid UTF-8".to_string()))?;

    let mut fields = FieldMap::new();
    for pair in body.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        fields.insert(
            decode_form_component(key)?,
            Value::String(decode_form_component(value)?),
        );
    }
    Ok(fields)
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, AppError>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

impl<S> FromRequest<S> for FieldInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(fields) = Json::<FieldMap>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(Self(fields))
            }
            BodyKind::Form => {
                let body = read_body(req, state).await?;
                Ok(Self(parse_form(&body)?))
            }
            BodyKind::Unspecified => {
                if read_body(req, state).await?.is_empty() {
                    Ok(Self(FieldMap::new()))
                } else {
                    Err(unsupported_body())
                }
            }
            BodyKind::Other => Err(unsupported_body()),
        }
    }
}
