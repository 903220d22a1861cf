use diesel::prelude::*;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::core::{database::schema::members, utils::validation_utils::null_as_empty};

/// A registered member.
///
/// The v1 endpoints read and write this type directly, so the entity carries
/// its own request validation. `id` is assigned by the database; any value sent
/// by a client is ignored on registration.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize, ToSchema, Validate,
)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[salvo(schema(example = json!({"id": 1, "name": "spring"})))]
pub struct Member {
    #[serde(default)]
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = members)]
pub struct NewMember<'a> {
    pub name: &'a str,
}
