use axum::{
    extract::{Query, State},
    routing::get,
    Router,
    Json,
};
use std::path::PathBuf;
use std::sync::Arc;
use crate::{
    AppState,
    error::AppError,
    models::NthMaxQuery,
    services::nth_max::find_nth_max,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/find-nth-max", get(find_nth_max_handler))
}

async fn find_nth_max_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NthMaxQuery>,
) -> Result<Json<i64>, AppError> {
    let start = std::time::Instant::now();
    tracing::info!("Finding rank {} maximum in {}", query.n, query.file_path);

    let path = PathBuf::from(&query.file_path);
    let n = query.n;
    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || find_nth_max(&path, n, &config)).await?;

    match &result {
        Ok(value) => tracing::info!("Found {} for rank {} in {:?}", value, n, start.elapsed()),
        Err(e) => tracing::warn!("No value for rank {} in {}: {}", n, query.file_path, e),
    }

    result.map(Json)
}
