use super::*;

fn dto(id: &str) -> ConversationDto {
    ConversationDto {
        id: id.to_owned(),
        name: None,
        avatar_url: None,
        last_message: None,
        updated_at: None,
        unread_count: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn mock_state_selects_first_conversation() {
    let state = MessagesState::new(DataSource::Mock);
    assert_eq!(state.conversations.len(), 5);
    assert_eq!(state.selected().map(|c| c.name.as_str()), Some("Alice"));
    assert_eq!(state.messages.len(), 3);
    assert!(!state.loading);
}

#[test]
fn remote_state_starts_loading_and_empty() {
    let state = MessagesState::new(DataSource::Remote);
    assert!(state.loading);
    assert!(state.conversations.is_empty());
    assert!(state.selected().is_none());
}

#[test]
fn data_source_from_flag() {
    assert_eq!(DataSource::from_mock_flag(true), DataSource::Mock);
    assert_eq!(DataSource::from_mock_flag(false), DataSource::Remote);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_replaces_message_list() {
    let mut state = MessagesState::new(DataSource::Mock);
    assert!(state.select("2"));
    assert_eq!(state.selected_id.as_deref(), Some("2"));
    let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["Meeting is confirmed for 3 PM.", "Great, I will be there.", "See you then."]);
}

fn row_keys(state: &MessagesState) -> Vec<MessageKey> {
    state.message_rows().into_iter().map(|(key, _)| key).collect()
}

#[test]
fn row_keys_change_when_switching_conversations() {
    let mut state = MessagesState::new(DataSource::Mock);
    assert!(state.select("1"));
    let alice = row_keys(&state);
    assert!(state.select("2"));
    let bob = row_keys(&state);

    assert_eq!(alice.len(), 3);
    assert_eq!(bob.len(), 3);
    assert!(alice.iter().all(|key| !bob.contains(key)));
}

#[test]
fn row_keys_after_send_and_reselect_never_reuse_another_conversation() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "on my way".to_owned();
    assert!(state.send_draft("10:45 AM"));
    let before: Vec<_> = state.message_rows();
    assert_eq!(before.last().map(|(key, _)| key.clone()), Some(("1".to_owned(), 4)));

    assert!(state.select("2"));
    let bob = row_keys(&state);
    assert!(before.iter().all(|(key, _)| !bob.contains(key)));

    assert!(state.select("1"));
    let rows = state.message_rows();
    assert_eq!(rows.len(), 3);
    // Any key shared with the pre-send rows must carry the same message.
    for (key, message) in &rows {
        if let Some((_, old)) = before.iter().find(|(k, _)| k == key) {
            assert_eq!(old, message);
        }
    }
}

#[test]
fn conversation_rows_hash_on_every_field() {
    use std::collections::HashSet;

    let original = mock_conversations().remove(0);
    let renamed = Conversation { name: "Alice B.".to_owned(), ..original.clone() };
    let retimed = Conversation { timestamp: "11:00 AM".to_owned(), ..original.clone() };
    let keys: HashSet<_> = [original, renamed, retimed].into_iter().collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn select_conversation_without_history_clears_messages() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "hi".to_owned();
    state.send_draft("10:00 AM");
    assert!(state.select("3"));
    assert!(state.messages.is_empty());
}

#[test]
fn reselecting_discards_local_sends() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "local only".to_owned();
    assert!(state.send_draft("10:50 AM"));
    assert_eq!(state.messages.len(), 4);
    state.select("2");
    state.select("1");
    assert_eq!(state.messages.len(), 3);
}

#[test]
fn select_unknown_id_is_ignored() {
    let mut state = MessagesState::new(DataSource::Mock);
    assert!(!state.select("99"));
    assert_eq!(state.selected_id.as_deref(), Some("1"));
    assert_eq!(state.messages.len(), 3);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_draft_appends_exactly_one_message_and_clears_input() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "On my way".to_owned();
    assert!(state.send_draft("10:45 AM"));
    assert_eq!(state.messages.len(), 4);
    let last = state.messages.last().unwrap();
    assert_eq!(last.id, 4);
    assert_eq!(last.sender, "me");
    assert_eq!(last.text, "On my way");
    assert_eq!(last.timestamp, "10:45 AM");
    assert!(last.is_mine());
    assert!(state.draft.is_empty());
}

#[test]
fn send_draft_ignores_blank_input() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "   \n".to_owned();
    assert!(!state.send_draft("10:45 AM"));
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.draft, "   \n");
}

#[test]
fn send_draft_keeps_text_untrimmed() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.draft = "  padded  ".to_owned();
    state.send_draft("now");
    assert_eq!(state.messages.last().map(|m| m.text.as_str()), Some("  padded  "));
}

#[test]
fn is_mine_accepts_me_and_user() {
    let mut msg = Message { id: 1, sender: "me".to_owned(), text: String::new(), timestamp: String::new() };
    assert!(msg.is_mine());
    msg.sender = "user".to_owned();
    assert!(msg.is_mine());
    msg.sender = "Alice".to_owned();
    assert!(!msg.is_mine());
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_filters_by_name_or_preview_case_insensitive() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.search = "BOB".to_owned();
    let names: Vec<_> = state.visible_conversations().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Bob"]);

    state.search = "file".to_owned();
    let names: Vec<_> = state.visible_conversations().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Charlie"]);
}

#[test]
fn blank_search_shows_everything() {
    let mut state = MessagesState::new(DataSource::Mock);
    state.search = "  ".to_owned();
    assert_eq!(state.visible_conversations().len(), 5);
}

// =============================================================
// Remote loading
// =============================================================

#[test]
fn from_dto_keeps_backend_values() {
    let conv = Conversation::from_dto(ConversationDto {
        id: "7".to_owned(),
        name: Some("Team".to_owned()),
        avatar_url: Some("https://img/7.png".to_owned()),
        last_message: Some("Deploy done".to_owned()),
        updated_at: Some("8:00 AM".to_owned()),
        unread_count: Some(4),
    });
    assert_eq!(conv.name, "Team");
    assert_eq!(conv.avatar, "https://img/7.png");
    assert_eq!(conv.last_message, "Deploy done");
    assert_eq!(conv.timestamp, "8:00 AM");
    assert_eq!(conv.unread, 4);
}

#[test]
fn from_dto_fills_missing_fields() {
    let conv = Conversation::from_dto(dto("7"));
    assert_eq!(conv.name, "Conversation 7");
    assert_eq!(conv.avatar, "https://i.pravatar.cc/150?u=7");
    assert_eq!(conv.last_message, "");
    assert_eq!(conv.unread, 0);
}

#[test]
fn load_remote_success_selects_first() {
    let mut state = MessagesState::new(DataSource::Remote);
    state.load_remote(Ok(vec![dto("a"), dto("b")]));
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.selected_id.as_deref(), Some("a"));
    assert!(state.messages.is_empty());
}

#[test]
fn load_remote_keeps_existing_selection() {
    let mut state = MessagesState::new(DataSource::Remote);
    state.load_remote(Ok(vec![dto("a"), dto("b")]));
    state.select("b");
    state.load_remote(Ok(vec![dto("a"), dto("b"), dto("c")]));
    assert_eq!(state.selected_id.as_deref(), Some("b"));
}

#[test]
fn load_remote_empty_list_clears_selection() {
    let mut state = MessagesState::new(DataSource::Remote);
    state.load_remote(Ok(Vec::new()));
    assert!(state.selected().is_none());
}

#[test]
fn load_remote_error_records_message_and_keeps_list() {
    let mut state = MessagesState::new(DataSource::Remote);
    state.load_remote(Ok(vec![dto("a")]));
    state.load_remote(Err(ApiError::Status { status: 503, message: Some("Maintenance".to_owned()) }));
    assert_eq!(state.error.as_deref(), Some("Maintenance"));
    assert_eq!(state.conversations.len(), 1);
    assert!(!state.loading);
}

#[test]
fn mock_messages_unknown_conversation_is_empty() {
    assert!(mock_messages("5").is_empty());
    assert_eq!(mock_messages("1").iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}
