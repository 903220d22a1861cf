use diesel::{
    ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper, insert_into,
    result::{DatabaseErrorKind, Error},
    update,
};
use salvo::async_trait;

use crate::core::{
    database::{
        db::{DbPool, DbPooledConnection},
        schema::members,
    },
    entities::models::{Member, NewMember},
    types::errors::{general::GeneralError, member_error::MemberError},
};

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create_member(&self, member: NewMember<'_>) -> Result<Member, MemberError>;
    async fn get_members(&self) -> Result<Vec<Member>, MemberError>;
    async fn get_member_by_id(&self, member_id: i32) -> Result<Member, MemberError>;
    async fn get_members_by_name(&self, name: &str) -> Result<Vec<Member>, MemberError>;
    async fn update_member(&self, member: Member) -> Result<Member, MemberError>;
}

#[derive(Debug, Clone)]
pub struct MemberRepositoryImpl {
    pool: DbPool,
}

impl MemberRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> Result<DbPooledConnection, GeneralError> {
        self.pool.get().map_err(|_| GeneralError::DbConnectionError)
    }
}

/// Maps a failed insert or update. The unique index on `members.name` is the
/// last line against two requests registering the same name at once.
fn map_write_error(err: Error, name: &str, action: &str) -> MemberError {
    match err {
        Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            MemberError::DuplicateMember(name.to_string())
        }
        err => MemberError::UnexpectedError(format!("Cannot {action} member: {err}")),
    }
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create_member(&self, member: NewMember<'_>) -> Result<Member, MemberError> {
        let mut conn = self.get_conn()?;

        let new_member = insert_into(members::table)
            .values(&member)
            .returning(Member::as_returning())
            .get_result(&mut conn);

        new_member.map_err(|err| map_write_error(err, member.name, "create"))
    }

    async fn get_members(&self) -> Result<Vec<Member>, MemberError> {
        let mut conn = self.get_conn()?;

        members::table
            .order(members::id.asc())
            .select(Member::as_select())
            .load(&mut conn)
            .map_err(|err| MemberError::UnexpectedError(err.to_string()))
    }

    async fn get_member_by_id(&self, member_id: i32) -> Result<Member, MemberError> {
        let mut conn = self.get_conn()?;

        let member = members::table
            .find(member_id)
            .select(Member::as_select())
            .first(&mut conn);

        match member {
            Ok(member) => Ok(member),
            Err(Error::NotFound) => Err(MemberError::MemberNotFound(member_id)),
            Err(err) => Err(MemberError::UnexpectedError(err.to_string())),
        }
    }

    async fn get_members_by_name(&self, name: &str) -> Result<Vec<Member>, MemberError> {
        let mut conn = self.get_conn()?;

        members::table
            .filter(members::name.eq(name))
            .select(Member::as_select())
            .load(&mut conn)
            .map_err(|err| MemberError::UnexpectedError(err.to_string()))
    }

    async fn update_member(&self, member: Member) -> Result<Member, MemberError> {
        let mut conn = self.get_conn()?;

        let updated_member = update(members::table)
            .filter(members::id.eq(member.id))
            .set(members::name.eq(&member.name))
            .returning(Member::as_returning())
            .get_result(&mut conn);

        match updated_member {
            Ok(member) => Ok(member),
            Err(Error::NotFound) => Err(MemberError::MemberNotFound(member.id)),
            Err(err) => Err(map_write_error(err, &member.name, "update")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_error(kind: DatabaseErrorKind) -> Error {
        Error::DatabaseError(kind, Box::new("duplicate key value".to_string()))
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate_member() {
        let err = map_write_error(
            database_error(DatabaseErrorKind::UniqueViolation),
            "kim",
            "create",
        );

        assert_eq!(err, MemberError::DuplicateMember("kim".to_string()));
    }

    #[test]
    fn test_other_write_errors_are_unexpected() {
        let err = map_write_error(
            database_error(DatabaseErrorKind::NotNullViolation),
            "kim",
            "update",
        );

        assert!(matches!(
            err,
            MemberError::UnexpectedError(message) if message.starts_with("Cannot update member")
        ));
    }
}
