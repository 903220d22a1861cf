use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::core::{
    entities::models::Member,
    types::errors::{general::GeneralError, member_error::MemberError},
    utils::validation_utils::validate_request,
};

use super::{
    dto::{
        CreateMemberRequest, CreateMemberResponse, MemberListResponse, UpdateMemberRequest,
        UpdateMemberResponse,
    },
    service::MemberService,
};

/// Service handle stored in the depot for the member handlers.
pub type SharedMemberService = Arc<dyn MemberService>;

pub fn get_member_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("v1/members")
                .post(save_member_v1)
                .get(members_v1),
        )
        .push(
            Router::with_path("v2/members")
                .post(save_member_v2)
                .get(members_v2)
                .push(Router::with_path("{id}").put(update_member_v2)),
        )
}

fn member_service(depot: &Depot) -> Result<SharedMemberService, MemberError> {
    depot
        .obtain::<SharedMemberService>()
        .cloned()
        .map_err(|_| MemberError::General(GeneralError::ServiceUnavailable("Member")))
}

/// Register a member from a raw entity body
///
/// Binds the request straight to the stored entity. Prefer `POST /api/v2/members`.
#[endpoint(tags("member"), status_codes(200, 400, 409, 500))]
async fn save_member_v1(
    _res: &mut Response,
    data: JsonBody<Member>,
    depot: &mut Depot,
) -> Result<CreateMemberResponse, MemberError> {
    let member = validate_request(data.into_inner())?;
    let member_service = member_service(depot)?;

    let id = member_service.join(member).await?;

    Ok(CreateMemberResponse { id })
}

/// Register a member
#[endpoint(tags("member"), status_codes(200, 400, 409, 500))]
async fn save_member_v2(
    _res: &mut Response,
    data: JsonBody<CreateMemberRequest>,
    depot: &mut Depot,
) -> Result<CreateMemberResponse, MemberError> {
    let request = validate_request(data.into_inner())?;
    let member_service = member_service(depot)?;

    let id = member_service.join(request.into_member()).await?;

    Ok(CreateMemberResponse { id })
}

/// List member names wrapped in a `data` object
#[endpoint(tags("member"), status_codes(200, 500))]
async fn members_v1(
    _res: &mut Response,
    depot: &mut Depot,
) -> Result<MemberListResponse, MemberError> {
    let member_service = member_service(depot)?;

    let members = member_service.find_members().await?;

    Ok(MemberListResponse::from(members))
}

/// List members as stored entities
///
/// Returns a bare array; prefer `GET /api/v1/members`.
#[endpoint(tags("member"), status_codes(200, 500))]
async fn members_v2(
    _res: &mut Response,
    depot: &mut Depot,
) -> Result<Json<Vec<Member>>, MemberError> {
    let member_service = member_service(depot)?;

    let members = member_service.find_members().await?;

    Ok(Json(members))
}

/// Rename a member and return its stored state
#[endpoint(tags("member"), status_codes(200, 400, 404, 500))]
async fn update_member_v2(
    _res: &mut Response,
    id: PathParam<i32>,
    data: JsonBody<UpdateMemberRequest>,
    depot: &mut Depot,
) -> Result<UpdateMemberResponse, MemberError> {
    let request = validate_request(data.into_inner())?;
    let member_service = member_service(depot)?;
    let member_id = id.into_inner();

    member_service.update(member_id, &request.name).await?;
    let member = member_service.find_one(member_id).await?;

    Ok(UpdateMemberResponse::from(member))
}
