use uuid::Uuid;

use crate::domain::entities::message::ArchivedMessage;
use crate::repositories::message::{MessageRepository, MockMessageRepository};

#[tokio::test]
async fn test_archive_keeps_insertion_order() {
    let repo = MockMessageRepository::new();
    let user_id = Uuid::new_v4();

    repo.create(ArchivedMessage::new("first".to_string(), user_id)).await.unwrap();
    repo.create(ArchivedMessage::new("second".to_string(), user_id)).await.unwrap();

    let bodies: Vec<String> = repo.list().await.unwrap().into_iter().map(|m| m.message).collect();
    assert_eq!(bodies, vec!["first", "second"]);
}

#[tokio::test]
async fn test_failing_archive() {
    let repo = MockMessageRepository::failing();

    let result = repo.create(ArchivedMessage::new("body".to_string(), Uuid::new_v4())).await;
    assert!(result.is_err());
    assert!(repo.list().await.unwrap().is_empty());
}
