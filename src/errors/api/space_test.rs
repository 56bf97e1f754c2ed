#[cfg(test)]
mod tests {
    use crate::errors::internal::{
        AccessError, CatalogError, CredentialError, InternalError, SpaceError, ValidationError,
    };
    use crate::errors::{AuthError, MetadataError, SpaceApiError};

    #[test]
    fn test_out_of_bounds_is_bad_request() {
        let err: InternalError = SpaceError::OutOfBounds {
            x: 100,
            y: 0,
            width: 100,
            height: 200,
        }
        .into();

        let api_error = SpaceApiError::from(err);
        assert_eq!(api_error.status_code(), 400);
        assert_eq!(api_error.error_code(), "out_of_bounds");
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err: InternalError = AccessError::NotSpaceOwner {
            user_id: "u2".to_string(),
            space_id: "s1".to_string(),
        }
        .into();

        let api_error = SpaceApiError::from(err);
        assert!(matches!(api_error, SpaceApiError::NotOwner(_)));
        assert_eq!(api_error.status_code(), 403);
    }

    #[test]
    fn test_unknown_references_are_not_found() {
        let map: InternalError = CatalogError::MapNotFound("m1".to_string()).into();
        assert_eq!(SpaceApiError::from(map).error_code(), "not_found");

        let placement: InternalError = SpaceError::PlacementNotFound {
            space_id: "s1".to_string(),
            element_ref: "e1".to_string(),
        }
        .into();
        let api_error = SpaceApiError::from(placement);
        assert_eq!(api_error.status_code(), 400);
        assert!(api_error.message().contains("e1"));
    }

    #[test]
    fn test_expired_token_is_unauthenticated() {
        let err: InternalError = CredentialError::ExpiredToken("jwt".to_string()).into();
        let api_error = SpaceApiError::from(err);
        assert!(matches!(api_error, SpaceApiError::Unauthenticated(_)));
    }

    #[test]
    fn test_auth_error_mapping() {
        let duplicate = AuthError::from(InternalError::from(CredentialError::DuplicateUsername(
            "alice".to_string(),
        )));
        assert!(matches!(duplicate, AuthError::DuplicateUsername(_)));
        assert_eq!(duplicate.status_code(), 400);

        let wrong = AuthError::from(InternalError::from(CredentialError::InvalidCredentials));
        assert_eq!(wrong.status_code(), 403);
        assert_eq!(wrong.message(), "Invalid username or password");

        let unknown = AuthError::from(InternalError::from(CredentialError::UserNotFound(
            "bob".to_string(),
        )));
        assert_eq!(unknown.message(), wrong.message());

        let invalid = AuthError::from(InternalError::from(ValidationError::missing("username")));
        assert!(matches!(invalid, AuthError::InvalidInput(_)));
    }

    #[test]
    fn test_metadata_unknown_avatar_is_bad_request() {
        let err: InternalError = CatalogError::AvatarNotFound("a1".to_string()).into();
        let api_error = MetadataError::from(err);
        assert!(matches!(api_error, MetadataError::InvalidInput(_)));
        assert!(api_error.message().contains("a1"));
    }
}
