use axum::Json;
use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::domain::{Submission, Upload};

use super::responses::DetailResponse;

/// Intake fields read from a `multipart/form-data` or
/// `application/x-www-form-urlencoded` body.
///
/// Any other body yields an empty submission, which intake rejects as missing content.
pub struct SubmissionForm(pub Submission);

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{detail}")]
    Unreadable { status: StatusCode, detail: String },
    #[error("Invalid boolean for {field}: {value:?}")]
    InvalidBoolean { field: &'static str, value: String },
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = match &self {
            FormError::Unreadable { status, .. } => *status,
            FormError::InvalidBoolean { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::warn!(status = %status, error = %self, "Rejected form body");
        (
            status,
            Json(DetailResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
struct UrlEncodedFields {
    file_base64: Option<String>,
    file_name: Option<String>,
    extract_tables: Option<String>,
    extract_images: Option<String>,
}

impl<S> FromRequest<S> for SubmissionForm
where
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                FormError::Unreadable {
                    status: e.status(),
                    detail: e.body_text(),
                }
            })?;
            return read_multipart(multipart).await.map(Self);
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<UrlEncodedFields>::from_request(req, state)
                .await
                .map_err(|e| FormError::Unreadable {
                    status: e.status(),
                    detail: e.body_text(),
                })?;
            return Ok(Self(Submission {
                upload: None,
                file_base64: fields.file_base64,
                file_name: fields.file_name,
                extract_tables: parse_flag("extract_tables", fields.extract_tables)?,
                extract_images: parse_flag("extract_images", fields.extract_images)?,
            }));
        }

        Ok(Self(Submission::default()))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Submission, FormError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(unreadable)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(unreadable)?;
                tracing::debug!(file_name = ?file_name, bytes = bytes.len(), "File part received");
                submission.upload = Some(Upload { file_name, bytes });
            }
            "file_base64" => {
                submission.file_base64 = Some(field.text().await.map_err(unreadable)?);
            }
            "file_name" => {
                submission.file_name = Some(field.text().await.map_err(unreadable)?);
            }
            "extract_tables" => {
                let value = field.text().await.map_err(unreadable)?;
                submission.extract_tables = parse_flag("extract_tables", Some(value))?;
            }
            "extract_images" => {
                let value = field.text().await.map_err(unreadable)?;
                submission.extract_images = parse_flag("extract_images", Some(value))?;
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown form field");
            }
        }
    }

    Ok(submission)
}

fn unreadable(e: axum::extract::multipart::MultipartError) -> FormError {
    FormError::Unreadable {
        status: e.status(),
        detail: e.body_text(),
    }
}

/// Accepts the usual form spellings of a boolean; blank counts as absent.
fn parse_flag(field: &'static str, value: Option<String>) -> Result<Option<bool>, FormError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
        _ => Err(FormError::InvalidBoolean { field, value: raw }),
    }
}
