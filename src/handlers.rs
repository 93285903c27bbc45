use axum::{
    Json,
    extract::{OriginalUri, Query, State},
};

use crate::{
    error::{AppError, AppResult},
    models::{HealthResponse, StudentQuery, StudentsResponse},
    state::AppState,
};

pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.store.len(),
    })
}

/// `GET /api?class=1A&class=1B`
///
/// Pairs are taken raw so that `class` may repeat.
pub async fn list_students(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<StudentsResponse> {
    let query = StudentQuery::from_pairs(pairs);
    let students = if query.is_unfiltered() {
        state.store.all().to_vec()
    } else {
        state.store.filter_by_class(&query.classes)
    };

    Json(StudentsResponse { students })
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppResult<()> {
    Err(AppError::not_found(format!("no route for {}", uri.path())))
}
