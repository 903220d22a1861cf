//! Request and response bodies of the member endpoints. They only exist at the
//! HTTP boundary; the router maps them to and from [`Member`].

use salvo::http::StatusCode;
use salvo::oapi::{self, EndpointOutRegister, ToSchema};
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::core::{entities::models::Member, utils::validation_utils::null_as_empty};

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[salvo(schema(example = json!({"name": "spring"})))]
pub(super) struct CreateMemberRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub name: String,
}

impl CreateMemberRequest {
    /// Builds the transient entity handed to the service; the id is assigned on insert.
    pub fn into_member(self) -> Member {
        Member {
            id: 0,
            name: self.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(super) struct CreateMemberResponse {
    pub id: i32,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[salvo(schema(example = json!({"name": "spring2"})))]
pub(super) struct UpdateMemberRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(super) struct UpdateMemberResponse {
    pub id: i32,
    pub name: String,
}

impl From<Member> for UpdateMemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(super) struct MemberDto {
    pub name: String,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self { name: member.name }
    }
}

/// Wraps list payloads under `data` so fields can be added next to it later.
#[derive(Debug, Serialize, ToSchema)]
pub(super) struct MemberListResponse {
    pub data: Vec<MemberDto>,
}

impl From<Vec<Member>> for MemberListResponse {
    fn from(members: Vec<Member>) -> Self {
        Self {
            data: members.into_iter().map(MemberDto::from).collect(),
        }
    }
}

macro_rules! ok_json_response {
    ($($response:ty),+ $(,)?) => {
        $(
            #[async_trait]
            impl Writer for $response {
                async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
                    res.status_code(StatusCode::OK);
                    res.render(Json(self));
                }
            }

            impl EndpointOutRegister for $response {
                fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
                    operation.responses.insert(
                        StatusCode::OK.as_str(),
                        oapi::Response::new("OK")
                            .add_content("application/json", <$response>::to_schema(components)),
                    );
                }
            }
        )+
    };
}

ok_json_response!(CreateMemberResponse, UpdateMemberResponse, MemberListResponse);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member(id: i32, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_create_request_missing_name_is_empty() {
        let request: CreateMemberRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_empty());
    }

    #[test]
    fn test_create_request_into_member() {
        let request = CreateMemberRequest {
            name: "spring".to_string(),
        };
        assert_eq!(request.into_member(), sample_member(0, "spring"));
    }

    #[test]
    fn test_list_response_only_exposes_names() {
        let response =
            MemberListResponse::from(vec![sample_member(1, "spring"), sample_member(2, "jpa")]);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"data": [{"name": "spring"}, {"name": "jpa"}]})
        );
    }

    #[test]
    fn test_update_response_from_member() {
        let json =
            serde_json::to_value(UpdateMemberResponse::from(sample_member(1, "spring2"))).unwrap();

        assert_eq!(json, serde_json::json!({"id": 1, "name": "spring2"}));
    }
}
