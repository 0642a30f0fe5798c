use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use super::decode_body;
use crate::app::state::AppState;
use crate::domain::model::{Person, PersonSearchRequest};
use crate::utils::error::Result;

pub async fn search_legacy_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Person>> {
    let request: PersonSearchRequest = decode_body(&body)?;
    let person = state
        .persons
        .search_by_mobile_number(&request.mobile_number)
        .await?;
    Ok(Json(person))
}
