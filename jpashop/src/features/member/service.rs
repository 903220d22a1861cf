use salvo::async_trait;
use tracing::{info, warn};

use crate::core::{
    entities::models::{Member, NewMember},
    types::errors::member_error::MemberError,
};

use super::repository::MemberRepository;

#[async_trait]
pub trait MemberService: Send + Sync {
    async fn join(&self, member: Member) -> Result<i32, MemberError>;
    async fn find_members(&self) -> Result<Vec<Member>, MemberError>;
    async fn find_one(&self, member_id: i32) -> Result<Member, MemberError>;
    async fn update(&self, member_id: i32, name: &str) -> Result<(), MemberError>;
}

#[derive(Debug, Clone)]
pub struct MemberServiceImpl<R: MemberRepository> {
    repository: R,
}

impl<R: MemberRepository> MemberServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fails when `name` belongs to any member other than `owner_id`.
    async fn validate_duplicate_name(
        &self,
        name: &str,
        owner_id: Option<i32>,
    ) -> Result<(), MemberError> {
        let found = self.repository.get_members_by_name(name).await?;

        if found.iter().any(|m| Some(m.id) != owner_id) {
            warn!("Rejected duplicate member name {}", name);
            return Err(MemberError::DuplicateMember(name.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: MemberRepository> MemberService for MemberServiceImpl<R> {
    async fn join(&self, member: Member) -> Result<i32, MemberError> {
        self.validate_duplicate_name(&member.name, None).await?;

        let new_member = NewMember { name: &member.name };
        let created = self.repository.create_member(new_member).await?;

        info!(member_id = created.id, "Member joined");

        Ok(created.id)
    }

    async fn find_members(&self) -> Result<Vec<Member>, MemberError> {
        self.repository.get_members().await
    }

    async fn find_one(&self, member_id: i32) -> Result<Member, MemberError> {
        self.repository.get_member_by_id(member_id).await
    }

    async fn update(&self, member_id: i32, name: &str) -> Result<(), MemberError> {
        let mut member = self.repository.get_member_by_id(member_id).await?;
        self.validate_duplicate_name(name, Some(member_id)).await?;

        member.name = name.to_string();
        self.repository.update_member(member).await?;

        info!(member_id, "Member updated");

        Ok(())
    }
}
