use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::message::ArchivedMessage;
use crate::domain::entities::user::User;
use crate::repositories::{MessageRepository, MockMessageRepository, MockUserRepository, UserRepository};
use crate::services::message::MessageService;

#[tokio::test]
async fn test_empty_archive_is_not_found() {
    let service = MessageService::new(
        Arc::new(MockMessageRepository::new()),
        Arc::new(MockUserRepository::new()),
    );

    let err = service.list_messages().await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No messages found");
}

#[tokio::test]
async fn test_messages_are_populated() {
    let messages = Arc::new(MockMessageRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let service = MessageService::new(messages.clone(), users.clone());

    let user = users
        .create(User::new("A".to_string(), "B".to_string(), "9999999999".to_string()))
        .await
        .unwrap();
    let orphan_id = Uuid::new_v4();

    messages
        .create(ArchivedMessage::new("first".to_string(), user.id))
        .await
        .unwrap();
    messages
        .create(ArchivedMessage::new("second".to_string(), orphan_id))
        .await
        .unwrap();
    messages
        .create(ArchivedMessage::new("third".to_string(), user.id))
        .await
        .unwrap();

    let listed = service.list_messages().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].user.as_ref().map(|u| u.id), Some(user.id));
    assert!(listed[1].user.is_none());
    assert_eq!(listed[2].user.as_ref().map(|u| u.id), Some(user.id));
}
