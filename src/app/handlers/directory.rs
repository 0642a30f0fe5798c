use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use super::{decode_body, SearchQuery};
use crate::app::state::AppState;
use crate::core::classify::recover_no_results;
use crate::domain::model::{
    DirectorySearchResponse, OrganizationSearchQuery, OrganizationSearchRequest,
    PersonSearchRequest,
};
use crate::utils::error::{GatewayError, Result};

pub async fn search_person(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<PersonSearchRequest>,
    body: Bytes,
) -> Result<Json<DirectorySearchResponse>> {
    let mobile_number = if query.mobile_number.is_empty() {
        decode_body::<PersonSearchRequest>(&body)?.mobile_number
    } else {
        query.mobile_number
    };

    if mobile_number.is_empty() {
        return Err(GatewayError::validation("Mobile number is required"));
    }

    recover_no_results(state.directory.search_by_mobile_number(&mobile_number).await).map(Json)
}

pub async fn search_organization(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery<OrganizationSearchQuery>,
    body: Bytes,
) -> Result<Json<DirectorySearchResponse>> {
    let org_no = if !query.org_no.is_empty() {
        query.org_no
    } else if !query.organization_number.is_empty() {
        query.organization_number
    } else {
        decode_body::<OrganizationSearchRequest>(&body)?.organization_number
    };

    if org_no.is_empty() {
        return Err(GatewayError::validation("Organization number is required"));
    }

    recover_no_results(state.directory.search_by_organization_number(&org_no).await).map(Json)
}
