use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{SearchProfilesRequest, SearchProfilesResponse};
use crate::routes::{current_user, error_response, postgres_status, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/search", web::post().to(search_profiles));
}

/// Search profiles endpoint
///
/// POST /api/v1/profiles/search
///
/// Request body:
/// ```json
/// {
///   "query": "ucla",
///   "filter": { "alcohol": false, "minimum_neatness": -5, "school": "UCLA" },
///   "limit": 50
/// }
/// ```
async fn search_profiles(
    state: web::Data<AppState>,
    req: web::Json<SearchProfilesRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let user = match current_user(&state, &http_req) {
        Ok(user) => user,
        Err(response) => return response,
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request by {}: {:?}", user.user_id, errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let candidates = match state.postgres.list_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to load profiles for search by {}: {}", user.user_id, e);
            return error_response(postgres_status(&e), "Failed to load profiles", e.to_string());
        }
    };

    let req = req.into_inner();
    let result = state.matcher.search(
        Some(user.user_id),
        candidates,
        &req.query,
        &req.filter,
        req.limit,
    );

    tracing::info!(
        "Returning {} of {} matching profiles for user {} (from {} candidates)",
        result.profiles.len(),
        result.total_matches,
        user.user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchProfilesResponse {
        profiles: result.profiles,
        total_matches: result.total_matches,
        total_candidates: result.total_candidates,
    })
}
