use crate::errors::InternalError;
use crate::errors::internal::{AccessError, CredentialError};
use crate::types::db::space;
use crate::types::internal::RequestContext;

/// Role and ownership gates
///
/// Every check reads only the request context and rows already loaded by the
/// caller, so a rejection never touches the database.
#[derive(Debug, Default)]
pub struct AccessProvider;

impl AccessProvider {
    pub fn new() -> Self {
        Self
    }

    /// Authenticated user id, or `MissingToken`
    pub fn require_identity<'a>(&self, ctx: &'a RequestContext) -> Result<&'a str, InternalError> {
        match ctx.user_id() {
            Some(user_id) if ctx.authenticated => Ok(user_id),
            _ => {
                tracing::warn!(request_id = %ctx.request_id, "Rejected unauthenticated request");
                Err(CredentialError::MissingToken.into())
            }
        }
    }

    /// Authenticated caller whose token carries the Admin role
    pub fn require_admin<'a>(&self, ctx: &'a RequestContext) -> Result<&'a str, InternalError> {
        let user_id = self.require_identity(ctx)?;

        match ctx.role() {
            Some(role) if role.is_admin() => Ok(user_id),
            _ => {
                tracing::warn!(request_id = %ctx.request_id, user_id, "Rejected non-admin catalog mutation");
                Err(AccessError::AdminRequired {
                    user_id: user_id.to_string(),
                }
                .into())
            }
        }
    }

    /// Caller must be the stored creator of `space`
    pub fn require_owner(&self, ctx: &RequestContext, space: &space::Model) -> Result<(), InternalError> {
        let user_id = self.require_identity(ctx)?;

        if space.creator_id != user_id {
            tracing::warn!(
                request_id = %ctx.request_id,
                user_id,
                space_id = %space.id,
                "Rejected space mutation by non-owner"
            );
            return Err(AccessError::NotSpaceOwner {
                user_id: user_id.to_string(),
                space_id: space.id.clone(),
            }
            .into());
        }

        Ok(())
    }
}
