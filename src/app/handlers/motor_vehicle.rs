use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use super::{decode_body, SearchQuery};
use crate::app::state::AppState;
use crate::core::classify::recover_no_results;
use crate::domain::model::{MotorVehicleSearchRequest, MotorVehicleSearchResponse};
use crate::utils::error::Result;

/// Query parameters win; the body is only read when neither is in the query string.
pub async fn search_motor_vehicle(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<MotorVehicleSearchRequest>,
    body: Bytes,
) -> Result<Json<MotorVehicleSearchResponse>> {
    let request = if query.license_number.is_empty() && query.vin.is_empty() {
        decode_body::<MotorVehicleSearchRequest>(&body)?
    } else {
        query
    };

    recover_no_results(state.motor_vehicles.search(&request).await).map(Json)
}
