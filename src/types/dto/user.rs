use poem_openapi::Object;

/// Request to change the caller's avatar
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateMetadataRequest {
    pub avatar_id: String,
}

/// Avatar image of one user, absent when no avatar is set
#[derive(Object, Debug, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct UserAvatarDto {
    pub user_id: String,
    pub avatar_url: Option<String>,
}

#[derive(Object, Debug)]
pub struct BulkMetadataResponse {
    pub avatars: Vec<UserAvatarDto>,
}
