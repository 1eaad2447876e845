//! Spam check handlers

use axum::{extract::State, Json};
use chatter_common::AppError;
use chatter_service::{
    EnqueueSpamCheckRequest, ListSpamChecksQuery, SpamCheckResponse, SpamCheckService,
};
use tracing::info;
use uuid::Uuid;

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::response::{Accepted, ApiResult};
use crate::state::AppState;

/// Queue a spam check for new forum content
///
/// POST /spam-checks
pub async fn enqueue_spam_check(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EnqueueSpamCheckRequest>,
) -> ApiResult<Accepted> {
    let job = request.into_job();
    let subject = job.subject();

    state
        .queue()
        .try_enqueue(job)
        .map_err(|e| AppError::Unavailable(e.to_string()))?;

    info!(%subject, "Spam check accepted");
    Ok(Accepted)
}

/// Get a recorded spam check
///
/// GET /spam-checks/{check_id}
pub async fn get_spam_check(
    State(state): State<AppState>,
    ApiPath(check_id): ApiPath<Uuid>,
) -> ApiResult<Json<SpamCheckResponse>> {
    let service = SpamCheckService::new(state.service_context());
    let check = service.get(check_id).await?;
    Ok(Json(check))
}

/// List recorded spam checks
///
/// GET /spam-checks?subject_type=&subject_id=&status=&is_spam=&limit=
pub async fn list_spam_checks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListSpamChecksQuery>,
) -> ApiResult<Json<Vec<SpamCheckResponse>>> {
    let service = SpamCheckService::new(state.service_context());
    let checks = service.list(query).await?;
    Ok(Json(checks))
}
