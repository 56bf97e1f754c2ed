// Admin account creation from the command line

use std::io::{self, Write};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::AuthCoordinator;
use crate::errors::InternalError;
use crate::types::internal::{RequestContext, Role};

/// Create a user with the Admin role
///
/// Goes through the same signup workflow as the HTTP API, so username
/// uniqueness and input validation are identical.
pub async fn create_admin(
    app_data: Arc<AppData>,
    username: &str,
    password: &str,
) -> Result<String, InternalError> {
    let ctx = RequestContext::for_cli("create-admin");
    let coordinator = AuthCoordinator::new(app_data);

    coordinator
        .signup(&ctx, username, password, Some(Role::Admin.as_str()))
        .await
}

/// Read a non-empty password from stdin
pub fn prompt_for_password() -> Result<String, io::Error> {
    loop {
        print!("Password for the new admin: ");
        io::stdout().flush()?;

        let mut password = String::new();
        io::stdin().read_line(&mut password)?;
        let password = password.trim().to_string();

        if password.is_empty() {
            println!("❌ Password cannot be empty");
            continue;
        }

        return Ok(password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::CredentialError;
    use crate::test::utils::setup_test_app_data;

    #[tokio::test]
    async fn test_create_admin_stores_admin_role() {
        let app_data = setup_test_app_data().await;

        let user_id = create_admin(Arc::clone(&app_data), "root", "s3cret")
            .await
            .unwrap();

        let stored = app_data
            .user_store
            .get_user_for_auth(app_data.db.as_ref(), "root")
            .await
            .unwrap();
        assert_eq!(stored.id, user_id);
        assert_eq!(stored.role().unwrap(), Role::Admin);
    }

    #[tokio::test]
    async fn test_create_admin_rejects_taken_username() {
        let app_data = setup_test_app_data().await;
        create_admin(Arc::clone(&app_data), "root", "s3cret").await.unwrap();

        let result = create_admin(app_data, "root", "other").await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::DuplicateUsername(_)))
        ));
    }
}
