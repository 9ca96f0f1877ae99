use super::*;

#[test]
fn register_request_uses_camel_case_confirm_password() {
    let req = RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "Sup3r$ecret".to_owned(),
        confirm_password: "Sup3r$ecret".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "Sup3r$ecret",
            "confirmPassword": "Sup3r$ecret",
        })
    );
}

#[test]
fn auth_response_parses_tokens_and_user() {
    let raw = r#"{
        "user": { "id": 7, "username": "alice", "email": "alice@example.com" },
        "access_token": "at",
        "refresh_token": "rt"
    }"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.user.username, "alice");
    assert_eq!(resp.access_token, "at");
    assert_eq!(resp.refresh_token.as_deref(), Some("rt"));
}

#[test]
fn auth_response_refresh_token_is_optional() {
    let raw = r#"{ "user": { "username": "a", "email": "a@b.c" }, "access_token": "at" }"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.refresh_token.is_none());
}

#[test]
fn error_body_message_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{ "message": "Email taken" }"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email taken"));
    let body: ErrorBody = serde_json::from_str(r#"{ "error": "nope" }"#).unwrap();
    assert!(body.message.is_none());
}

#[test]
fn conversation_id_accepts_number_or_string() {
    let a: ConversationDto = serde_json::from_str(r#"{ "id": 42 }"#).unwrap();
    assert_eq!(a.id, "42");
    let b: ConversationDto = serde_json::from_str(r#"{ "id": "c-9" }"#).unwrap();
    assert_eq!(b.id, "c-9");
}

#[test]
fn conversation_id_rejects_other_types() {
    assert!(serde_json::from_str::<ConversationDto>(r#"{ "id": true }"#).is_err());
    assert!(serde_json::from_str::<ConversationDto>(r#"{ "name": "x" }"#).is_err());
}

#[test]
fn conversation_reads_aliases() {
    let raw = r#"{
        "id": 1,
        "title": "Team",
        "avatar": "https://img/1.png",
        "lastMessage": "hi",
        "timestamp": "9:30 AM",
        "unread": 3
    }"#;
    let dto: ConversationDto = serde_json::from_str(raw).unwrap();
    assert_eq!(dto.name.as_deref(), Some("Team"));
    assert_eq!(dto.avatar_url.as_deref(), Some("https://img/1.png"));
    assert_eq!(dto.last_message.as_deref(), Some("hi"));
    assert_eq!(dto.updated_at.as_deref(), Some("9:30 AM"));
    assert_eq!(dto.unread_count, Some(3));
}

#[test]
fn conversation_list_accepts_all_wrappers() {
    for raw in [
        r#"[{ "id": 1 }, { "id": 2 }]"#,
        r#"{ "data": [{ "id": 1 }, { "id": 2 }] }"#,
        r#"{ "conversations": [{ "id": 1 }, { "id": 2 }] }"#,
    ] {
        let list: ConversationList = serde_json::from_str(raw).unwrap();
        let ids: Vec<_> = list.into_items().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2"], "payload {raw}");
    }
}
