use axum::{Json, extract::State};
use tracing::debug;

use crate::db::UserRecord;
use crate::middleware::username::Username;
use crate::{LookupError, router::AppState};

/// GET /api/user/{username} -> the matching `users` row as a JSON object.
pub async fn get_user(
    State(state): State<AppState>,
    Username(username): Username,
) -> Result<Json<UserRecord>, LookupError> {
    match state.store.find_by_username(&username).await? {
        Some(record) => {
            debug!(username = %username, "user found");
            Ok(Json(record))
        }
        None => {
            debug!(username = %username, "user not found");
            Err(LookupError::UserNotFound)
        }
    }
}
