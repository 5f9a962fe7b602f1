/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; the only handle handlers use to reach the store.
    pub pool: gigboard_db::DbPool,
}
