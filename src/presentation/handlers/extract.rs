use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::{IntakeError, accept};
use crate::domain::{ExtractionProfile, Submission};
use crate::presentation::state::AppState;

use super::responses::{DetailResponse, ErrorResponse, ExtractionResponse};
use super::submission_form::SubmissionForm;

pub async fn extract_handler(
    State(state): State<AppState>,
    SubmissionForm(submission): SubmissionForm,
) -> Response {
    run_extraction(&state, ExtractionProfile::General, submission).await
}

pub async fn extract_bank_statement_handler(
    State(state): State<AppState>,
    SubmissionForm(submission): SubmissionForm,
) -> Response {
    run_extraction(&state, ExtractionProfile::BankStatement, submission).await
}

pub async fn extract_invoice_handler(
    State(state): State<AppState>,
    SubmissionForm(submission): SubmissionForm,
) -> Response {
    run_extraction(&state, ExtractionProfile::Invoice, submission).await
}

#[tracing::instrument(skip_all, fields(profile = %profile))]
async fn run_extraction(
    state: &AppState,
    profile: ExtractionProfile,
    submission: Submission,
) -> Response {
    let request = match accept(submission, profile) {
        Ok(request) => request,
        Err(IntakeError::Client(e)) => {
            tracing::warn!(error = %e, "Rejected extraction request");
            return (
                StatusCode::BAD_REQUEST,
                Json(DetailResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, error_type = e.kind(), "Failed to decode upload");
            return server_error(profile, e.to_string(), e.kind());
        }
    };

    let extraction = match state.extraction_service.extract(&request).await {
        Ok(extraction) => extraction,
        Err(e) => {
            tracing::error!(
                error = %e,
                error_type = e.kind(),
                file_name = %request.file_name,
                "Extraction failed"
            );
            return server_error(profile, e.to_string(), e.kind());
        }
    };

    let response = ExtractionResponse::project(profile, extraction, request.options);

    tracing::info!(
        file_name = %request.file_name,
        table_count = response.table_count(),
        "Extraction complete"
    );

    (StatusCode::OK, Json(response)).into_response()
}

/// 500 body; only the general endpoint names the error type.
fn server_error(profile: ExtractionProfile, error: String, kind: &'static str) -> Response {
    let error_type = match profile {
        ExtractionProfile::General => Some(kind.to_string()),
        _ => None,
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error,
            error_type,
        }),
    )
        .into_response()
}
