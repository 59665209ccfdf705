use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use futures::future::join_all;

use crate::{
    db::ResponseDoc,
    extractors::{FormName, UserId},
    models::Questions,
    names,
    rejections::AppError,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::SUBMIT_RESPONSE_URL, post(submit_responses))
}

/// Records one user's answers for a form. The saves run concurrently and are
/// all joined before the response is assembled, so the returned array holds
/// exactly one entry per submitted item, in submission order.
async fn submit_responses(
    FormName(form_name): FormName,
    UserId(user_id): UserId,
    State(state): State<AppState>,
    Json(body): Json<Questions>,
) -> Result<(StatusCode, Json<Questions>), AppError> {
    let saves = body.into_iter().map(|item| {
        state
            .store
            .upsert_response(ResponseDoc::new(&form_name, &user_id, item))
    });

    let mut saved = Vec::new();
    let mut failures = 0usize;
    for result in join_all(saves).await {
        match result {
            Ok(doc) => saved.push(doc.into_public()),
            Err(e) => {
                tracing::error!("could not save response for user '{user_id}': {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(AppError::Internal("could not save all responses"));
    }

    Ok((StatusCode::CREATED, Json(saved)))
}
