use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::{
    db::QuestionDoc,
    extractors::FormName,
    models::{Question, Questions},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, get(list_questions))
        .route(names::ADD_QUESTION_URL, post(add_question))
}

/// All questions belonging to the form named in the `form-name` header.
async fn list_questions(
    FormName(form_name): FormName,
    State(state): State<AppState>,
) -> Result<Json<Questions>, AppError> {
    let questions = state
        .store
        .questions_by_form(&form_name)
        .await
        .reject("could not fetch questions")?;

    let questions = questions
        .into_iter()
        .map(QuestionDoc::into_public)
        .collect();

    Ok(Json(questions))
}

/// Adds one question to the form named in the `form-name` header.
async fn add_question(
    FormName(form_name): FormName,
    State(state): State<AppState>,
    Json(body): Json<Question>,
) -> Result<(StatusCode, Json<Question>), AppError> {
    let saved = state
        .store
        .add_question(QuestionDoc::new(form_name, body))
        .await
        .reject("could not save question")?;

    Ok((StatusCode::CREATED, Json(saved.into_public())))
}
