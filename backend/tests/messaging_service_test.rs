//! Integration tests for the messaging service
//!
//! Exercises the public library API the way a transport layer would drive it.

use messaging_directory::messaging::{
    ChatListExt, MessagingError, MessagingService, User, NO_MESSAGES_TEXT,
};

/// Service with Alice (u1) and Bob (u2) registered
fn create_test_service() -> MessagingService {
    let mut service = MessagingService::new();
    service.add_user(User::new("u1", "Alice"));
    service.add_user(User::new("u2", "Bob"));
    service
}

#[test]
fn test_chat_created_on_first_message() {
    let mut service = create_test_service();
    let sent = service.send_message("u1", "u2", "Привет!").unwrap();

    let chats = service.chats();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].partner_id(), "u2");
    assert_eq!(chats[0].messages().len(), 1);
    assert_eq!(chats[0].messages()[0], sent);
}

#[test]
fn test_unread_chats_count_after_receiving() {
    let mut service = create_test_service();
    service.send_message("u1", "u2", "Привет!").unwrap();
    assert_eq!(service.unread_chats_count(), 1);
}

#[test]
fn test_last_messages_include_sentinel_for_empty_chat() {
    let mut service = create_test_service();
    service.send_message("u1", "u2", "Привет!").unwrap();
    service.delete_chat("u2");
    service.create_chat_if_not_exists("u3");

    assert_eq!(service.last_messages(), vec!["нет сообщений"]);
}

#[test]
fn test_last_n_messages_marks_chat_read() {
    let mut service = create_test_service();
    for text in ["1", "2", "3"] {
        service.send_message("u1", "u2", text).unwrap();
    }

    let messages = service.messages_from_chat("u2", 2).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "2");
    assert_eq!(messages[1].text, "3");

    let chat = service.chats()[0];
    assert_eq!(chat.unread_count(), 0);

    let all = service.messages_from_chat("u2", 10).unwrap();
    let texts: Vec<&str> = all.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
    assert_eq!(service.unread_chats_count(), 0);
}

#[test]
fn test_read_marking_is_idempotent() {
    let mut service = create_test_service();
    service.send_message("u1", "u2", "a").unwrap();

    service.messages_from_chat("u2", 1).unwrap();
    assert_eq!(service.chat("u2").unwrap().unread_count(), 0);
    service.messages_from_chat("u2", 1).unwrap();
    assert_eq!(service.chat("u2").unwrap().unread_count(), 0);
}

#[test]
fn test_delete_message_from_chat() {
    let mut service = create_test_service();
    let message = service.send_message("u1", "u2", "Удалить меня").unwrap();
    assert!(service.delete_message("u2", &message.id));
    assert!(!service.delete_message("u2", "invalid_id"));
}

#[test]
fn test_delete_entire_chat_cascades() {
    let mut service = create_test_service();
    service.send_message("u1", "u2", "Сообщение").unwrap();

    assert!(service.delete_chat("u2"));
    assert!(service.chats().is_empty());
    assert_eq!(
        service.messages_from_chat("u2", 5),
        Err(MessagingError::ChatNotFound("u2".to_string()))
    );
}

#[test]
fn test_edit_round_trip() {
    let mut service = create_test_service();
    let message = service.send_message("u1", "u2", "Старый текст").unwrap();
    assert!(service.edit_message("u2", &message.id, "Новый текст"));

    let stored = service.chat("u2").unwrap().message(&message.id).unwrap().clone();
    assert_eq!(stored.text, "Новый текст");
    assert_eq!(stored.id, message.id);
    assert_eq!(stored.timestamp, message.timestamp);
    assert_eq!(stored.is_read, message.is_read);

    let fetched = service.messages_from_chat("u2", 1).unwrap();
    assert_eq!(fetched[0].text, "Новый текст");
}

#[test]
fn test_unknown_sender_rejected_without_side_effects() {
    let mut service = create_test_service();
    let result = service.send_message("unknown", "u2", "Текст");

    assert!(matches!(result, Err(MessagingError::UnknownUser(_))));
    assert!(service.chats().is_empty());
    assert_eq!(service.unread_chats_count(), 0);
}

#[test]
fn test_missing_chat_not_found() {
    let mut service = create_test_service();
    let result = service.messages_from_chat("unknown", 1);
    assert!(matches!(result, Err(MessagingError::ChatNotFound(_))));
}

#[test]
fn test_unread_count_aggregation() {
    let mut service = create_test_service();
    service.add_user(User::new("u3", "Carol"));
    service.send_message("u1", "u2", "hi Bob").unwrap();
    service.send_message("u1", "u3", "hi Carol").unwrap();
    assert_eq!(service.unread_chats_count(), 2);

    service.messages_from_chat("u2", 1).unwrap();
    assert_eq!(service.unread_chats_count(), 1);

    let unread = service.chats().filter_unread();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].partner_id(), "u3");
}

#[test]
fn test_services_are_independent() {
    let mut first = create_test_service();
    let second = create_test_service();
    first.send_message("u1", "u2", "only here").unwrap();

    assert_eq!(first.chat_count(), 1);
    assert_eq!(second.chat_count(), 0);
    assert_eq!(second.last_messages(), Vec::<String>::new());
}

#[test]
fn test_sentinel_for_chat_emptied_by_delete() {
    let mut service = create_test_service();
    let message = service.send_message("u1", "u2", "gone soon").unwrap();
    service.delete_message("u2", &message.id);

    assert!(service.chat("u2").unwrap().is_empty());
    assert_eq!(service.last_messages(), vec![NO_MESSAGES_TEXT]);
}
