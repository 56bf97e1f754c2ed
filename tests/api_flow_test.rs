mod common;

use common::{bearer, register, test_client};
use poem::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let (client, _) = test_client().await;

    let resp = client.get("/api/v1/health").send().await;

    resp.assert_status_is_ok();
    resp.json().await.value().object().get("status").assert_string("healthy");
}

#[tokio::test]
async fn test_signup_rules() {
    let (client, _) = test_client().await;
    register(&client, "alice", "User").await;

    let duplicate = client
        .post("/api/v1/signup")
        .body_json(&json!({ "username": "alice", "password": "x" }))
        .send()
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);

    let lowercase_role = client
        .post("/api/v1/signup")
        .body_json(&json!({ "username": "bob", "password": "x", "type": "admin" }))
        .send()
        .await;
    lowercase_role.assert_status(StatusCode::BAD_REQUEST);

    let wrong_password = client
        .post("/api/v1/signin")
        .body_json(&json!({ "username": "alice", "password": "nope" }))
        .send()
        .await;
    wrong_password.assert_status(StatusCode::FORBIDDEN);

    let unknown_user = client
        .post("/api/v1/signin")
        .body_json(&json!({ "username": "ghost", "password": "nope" }))
        .send()
        .await;
    unknown_user.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_catalog_requires_admin() {
    let (client, _) = test_client().await;
    let (_, user_token) = register(&client, "user", "User").await;
    let element = json!({ "imageUrl": "https://img/chair.png", "width": 1, "height": 1, "static": true });

    let anonymous = client.post("/api/v1/admin/element").body_json(&element).send().await;
    anonymous.assert_status(StatusCode::FORBIDDEN);

    let as_user = client
        .post("/api/v1/admin/element")
        .header("Authorization", bearer(&user_token))
        .body_json(&element)
        .send()
        .await;
    as_user.assert_status(StatusCode::FORBIDDEN);

    let tampered = client
        .post("/api/v1/admin/element")
        .header("Authorization", bearer(&format!("{}x", user_token)))
        .body_json(&element)
        .send()
        .await;
    tampered.assert_status(StatusCode::FORBIDDEN);

    let listing = client.get("/api/v1/elements").send().await;
    listing.assert_status_is_ok();
    listing.json().await.value().object().get("elements").array().assert_len(0);
}

#[tokio::test]
async fn test_map_to_space_flow() {
    let (client, _) = test_client().await;
    let (_, admin_token) = register(&client, "admin", "Admin").await;
    let (_, owner_token) = register(&client, "owner", "User").await;
    let (_, other_token) = register(&client, "other", "User").await;

    let element = client
        .post("/api/v1/admin/element")
        .header("Authorization", bearer(&admin_token))
        .body_json(&json!({ "imageUrl": "https://img/e.png", "width": 1, "height": 1, "static": true }))
        .send()
        .await;
    element.assert_status_is_ok();
    let element_id = element.json().await.value().object().get("id").string().to_string();

    let map = client
        .post("/api/v1/admin/map")
        .header("Authorization", bearer(&admin_token))
        .body_json(&json!({
            "name": "office",
            "thumbnail": "https://img/office.png",
            "dimensions": "100x200",
            "defaultElements": [
                { "elementId": element_id, "x": 20, "y": 20 },
                { "elementId": element_id, "x": 18, "y": 20 }
            ]
        }))
        .send()
        .await;
    map.assert_status_is_ok();
    let map_id = map.json().await.value().object().get("id").string().to_string();

    let space = client
        .post("/api/v1/space")
        .header("Authorization", bearer(&owner_token))
        .body_json(&json!({ "name": "my office", "mapId": map_id }))
        .send()
        .await;
    space.assert_status_is_ok();
    let space_id = space.json().await.value().object().get("spaceId").string().to_string();

    let detail = client
        .get(format!("/api/v1/space/{}", space_id))
        .header("Authorization", bearer(&owner_token))
        .send()
        .await;
    detail.assert_status_is_ok();
    let detail = detail.json().await;
    let detail = detail.value().object();
    detail.get("dimensions").assert_string("100x200");
    detail.get("elements").array().assert_len(2);

    let inside = client
        .post("/api/v1/space/element")
        .header("Authorization", bearer(&owner_token))
        .body_json(&json!({ "spaceId": space_id, "elementId": element_id, "x": 99, "y": 199 }))
        .send()
        .await;
    inside.assert_status_is_ok();

    let outside = client
        .post("/api/v1/space/element")
        .header("Authorization", bearer(&owner_token))
        .body_json(&json!({ "spaceId": space_id, "elementId": element_id, "x": 100, "y": 0 }))
        .send()
        .await;
    outside.assert_status(StatusCode::BAD_REQUEST);
    outside.json().await.value().object().get("error").assert_string("out_of_bounds");

    let intruder = client
        .post("/api/v1/space/element")
        .header("Authorization", bearer(&other_token))
        .body_json(&json!({ "spaceId": space_id, "elementId": element_id, "x": 1, "y": 1 }))
        .send()
        .await;
    intruder.assert_status(StatusCode::FORBIDDEN);

    let intruder_delete = client
        .delete(format!("/api/v1/space/{}", space_id))
        .header("Authorization", bearer(&other_token))
        .send()
        .await;
    intruder_delete.assert_status(StatusCode::FORBIDDEN);

    let removed = client
        .delete("/api/v1/space/element")
        .header("Authorization", bearer(&owner_token))
        .body_json(&json!({ "spaceId": space_id, "elementId": element_id }))
        .send()
        .await;
    removed.assert_status_is_ok();

    let all = client
        .get("/api/v1/space/all")
        .header("Authorization", bearer(&owner_token))
        .send()
        .await;
    all.assert_status_is_ok();
    let all = all.json().await;
    let spaces = all.value().object().get("spaces").array();
    spaces.assert_len(1);
    spaces.get(0).object().get("dimensions").assert_string("100x200");
    spaces.get(0).object().get("thumbnail").assert_string("https://img/office.png");

    let others = client
        .get("/api/v1/space/all")
        .header("Authorization", bearer(&other_token))
        .send()
        .await;
    others.json().await.value().object().get("spaces").array().assert_len(0);

    let deleted = client
        .delete(format!("/api/v1/space/{}", space_id))
        .header("Authorization", bearer(&owner_token))
        .send()
        .await;
    deleted.assert_status_is_ok();

    let gone = client
        .get(format!("/api/v1/space/{}", space_id))
        .header("Authorization", bearer(&owner_token))
        .send()
        .await;
    gone.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_space_creation_errors() {
    let (client, _) = test_client().await;
    let (_, token) = register(&client, "owner", "User").await;

    let anonymous = client
        .post("/api/v1/space")
        .body_json(&json!({ "name": "s", "dimensions": "10x10" }))
        .send()
        .await;
    anonymous.assert_status(StatusCode::FORBIDDEN);

    let no_dimensions = client
        .post("/api/v1/space")
        .header("Authorization", bearer(&token))
        .body_json(&json!({ "name": "s" }))
        .send()
        .await;
    no_dimensions.assert_status(StatusCode::BAD_REQUEST);

    let unknown_map = client
        .post("/api/v1/space")
        .header("Authorization", bearer(&token))
        .body_json(&json!({ "name": "s", "mapId": "missing" }))
        .send()
        .await;
    unknown_map.assert_status(StatusCode::BAD_REQUEST);

    let empty = client
        .post("/api/v1/space")
        .header("Authorization", bearer(&token))
        .body_json(&json!({ "name": "s", "dimensions": "10x20" }))
        .send()
        .await;
    empty.assert_status_is_ok();
}

#[tokio::test]
async fn test_avatar_metadata_flow() {
    let (client, _) = test_client().await;
    let (_, admin_token) = register(&client, "admin", "Admin").await;
    let (alice_id, alice_token) = register(&client, "alice", "User").await;
    let (bob_id, bob_token) = register(&client, "bob", "User").await;

    let avatar = client
        .post("/api/v1/admin/avatar")
        .header("Authorization", bearer(&admin_token))
        .body_json(&json!({ "name": "Knight", "imageUrl": "https://img/knight.png" }))
        .send()
        .await;
    avatar.assert_status_is_ok();
    let avatar_id = avatar.json().await.value().object().get("id").string().to_string();

    let bad_avatar = client
        .post("/api/v1/user/metadata")
        .header("Authorization", bearer(&alice_token))
        .body_json(&json!({ "avatarId": "nope" }))
        .send()
        .await;
    bad_avatar.assert_status(StatusCode::BAD_REQUEST);

    let updated = client
        .post("/api/v1/user/metadata")
        .header("Authorization", bearer(&alice_token))
        .body_json(&json!({ "avatarId": avatar_id }))
        .send()
        .await;
    updated.assert_status_is_ok();

    let bulk = client
        .get("/api/v1/user/metadata/bulk")
        .query("ids", &format!("[{},{}]", alice_id, bob_id))
        .header("Authorization", bearer(&bob_token))
        .send()
        .await;
    bulk.assert_status_is_ok();
    let bulk = bulk.json().await;
    let avatars = bulk.value().object().get("avatars").array();
    avatars.assert_len(2);
    avatars.get(0).object().get("userId").assert_string(&alice_id);
    avatars.get(0).object().get("avatarUrl").assert_string("https://img/knight.png");
    avatars.get(1).object().get("userId").assert_string(&bob_id);

    let anonymous = client
        .get("/api/v1/user/metadata/bulk")
        .query("ids", &alice_id)
        .send()
        .await;
    anonymous.assert_status(StatusCode::FORBIDDEN);
}
