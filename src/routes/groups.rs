use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;
use crate::core::{authorize, permissions_for, MembershipAction, PermissionError};
use crate::models::{Membership, MembershipActionResponse, MembershipResponse};
use crate::routes::{current_user, error_response, postgres_status, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/groups/membership", web::get().to(get_membership))
        .route("/groups/members/{member_id}", web::delete().to(remove_member))
        .route("/groups/leave", web::post().to(leave_group))
        .route("/groups", web::delete().to(delete_group));
}

pub(crate) fn permission_status(err: &PermissionError) -> StatusCode {
    match err {
        PermissionError::MemberNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::FORBIDDEN,
    }
}

/// Load the caller's membership, or the response to return instead
async fn load_membership(state: &AppState, http_req: &HttpRequest) -> Result<Membership, HttpResponse> {
    let user = current_user(state, http_req)?;

    match state.postgres.get_membership(user.user_id).await {
        Ok(Some(membership)) => Ok(membership),
        Ok(None) => Err(error_response(
            StatusCode::NOT_FOUND,
            "Not in a group",
            format!("User {} has no group membership", user.user_id),
        )),
        Err(e) => {
            tracing::error!("Failed to load membership for {}: {}", user.user_id, e);
            Err(error_response(postgres_status(&e), "Failed to load membership", e.to_string()))
        }
    }
}

/// Group dashboard endpoint
///
/// GET /api/v1/groups/membership
///
/// Returns the caller's membership, the group's members, and which
/// actions the caller may take.
async fn get_membership(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let membership = match load_membership(&state, &http_req).await {
        Ok(membership) => membership,
        Err(response) => return response,
    };

    let permissions = permissions_for(&membership);

    HttpResponse::Ok().json(MembershipResponse {
        membership,
        permissions,
    })
}

/// Authorize an action against a fresh snapshot and execute it
async fn run_action(state: &AppState, http_req: &HttpRequest, action: MembershipAction) -> HttpResponse {
    let membership = match load_membership(state, http_req).await {
        Ok(membership) => membership,
        Err(response) => return response,
    };

    let transition = match authorize(&membership, action) {
        Ok(transition) => transition,
        Err(e) => {
            tracing::info!(
                "Refused {} for user {} in group {}: {}",
                action.name(),
                membership.user_id,
                membership.group_id,
                e
            );
            return error_response(permission_status(&e), "Action not permitted", e.to_string());
        }
    };

    if let Err(e) = state.postgres.apply_transition(&transition).await {
        tracing::error!("Failed to {} for user {}: {}", action.name(), membership.user_id, e);
        return error_response(postgres_status(&e), "Failed to update group", e.to_string());
    }

    HttpResponse::Ok().json(MembershipActionResponse {
        success: true,
        action: action.name().to_string(),
    })
}

/// DELETE /api/v1/groups/members/{member_id}
async fn remove_member(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    http_req: HttpRequest,
) -> impl Responder {
    let member_id = path.into_inner();
    run_action(&state, &http_req, MembershipAction::RemoveMember { member_id }).await
}

/// POST /api/v1/groups/leave
async fn leave_group(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    run_action(&state, &http_req, MembershipAction::LeaveGroup).await
}

/// DELETE /api/v1/groups
async fn delete_group(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    run_action(&state, &http_req, MembershipAction::DeleteGroup).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_status_mapping() {
        assert_eq!(permission_status(&PermissionError::MemberNotFound(Uuid::nil())), StatusCode::NOT_FOUND);
        assert_eq!(permission_status(&PermissionError::AdminCannotLeave), StatusCode::FORBIDDEN);
        assert_eq!(permission_status(&PermissionError::GroupNotEmpty(3)), StatusCode::FORBIDDEN);
    }
}
