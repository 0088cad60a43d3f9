use crate::entities::messages::{
    IncomingMessage as IncomingMessageEntity, Message as MessageEntity, MessageWithUsers,
    OutgoingMessage as OutgoingMessageEntity,
};
use crate::models::users::UserInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full message detail with both participants embedded.
#[derive(Debug, Serialize)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserInfo,
    pub to_user: UserInfo,
}

impl From<MessageWithUsers> for Message {
    fn from(value: MessageWithUsers) -> Self {
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            from_user: UserInfo {
                username: value.from_username,
                first_name: value.from_first_name,
                last_name: value.from_last_name,
                phone: value.from_phone,
            },
            to_user: UserInfo {
                username: value.to_username,
                first_name: value.to_first_name,
                last_name: value.to_last_name,
                phone: value.to_phone,
            },
        }
    }
}

/// A freshly created message; read_at is always NULL at this point.
#[derive(Debug, Serialize)]
pub struct SentMessage {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<MessageEntity> for SentMessage {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            from_username: value.from_username,
            to_username: value.to_username,
            body: value.body,
            sent_at: value.sent_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadReceipt {
    pub id: i64,
    pub read_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OutgoingMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: UserInfo,
}

impl From<OutgoingMessageEntity> for OutgoingMessage {
    fn from(value: OutgoingMessageEntity) -> Self {
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            to_user: UserInfo {
                username: value.to_username,
                first_name: value.to_first_name,
                last_name: value.to_last_name,
                phone: value.to_phone,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IncomingMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserInfo,
}

impl From<IncomingMessageEntity> for IncomingMessage {
    fn from(value: IncomingMessageEntity) -> Self {
        Self {
            id: value.id,
            body: value.body,
            sent_at: value.sent_at,
            read_at: value.read_at,
            from_user: UserInfo {
                username: value.from_username,
                first_name: value.from_first_name,
                last_name: value.from_last_name,
                phone: value.from_phone,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendMessageArgs {
    pub to_username: String,
    pub body: String,
}

#[derive(Serialize)]
pub struct MessageDetailResponse {
    pub message: Message,
}

#[derive(Serialize)]
pub struct MessageCreatedResponse {
    pub message: SentMessage,
}

#[derive(Serialize)]
pub struct MessageReadResponse {
    pub message: ReadReceipt,
}

#[derive(Serialize)]
pub struct OutgoingMessagesResponse {
    pub messages: Vec<OutgoingMessage>,
}

#[derive(Serialize)]
pub struct IncomingMessagesResponse {
    pub messages: Vec<IncomingMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_embeds_both_participants() {
        let sent_at = Utc::now();
        let row = MessageWithUsers {
            id: 7,
            body: "hi".to_owned(),
            sent_at,
            read_at: None,
            from_username: "alice".to_owned(),
            from_first_name: "Alice".to_owned(),
            from_last_name: "Adams".to_owned(),
            from_phone: "+15550001111".to_owned(),
            to_username: "bob".to_owned(),
            to_first_name: "Bob".to_owned(),
            to_last_name: "Brown".to_owned(),
            to_phone: "+15550002222".to_owned(),
        };
        let message = Message::from(row);
        assert_eq!(message.id, 7);
        assert_eq!(message.from_user.username, "alice");
        assert_eq!(message.from_user.last_name, "Adams");
        assert_eq!(message.to_user.username, "bob");
        assert_eq!(message.to_user.phone, "+15550002222");
        assert_eq!(message.read_at, None);
    }

    #[test]
    fn outgoing_embeds_the_recipient() {
        let row = OutgoingMessageEntity {
            id: 3,
            body: "hello".to_owned(),
            sent_at: Utc::now(),
            read_at: None,
            to_username: "bob".to_owned(),
            to_first_name: "Bob".to_owned(),
            to_last_name: "Brown".to_owned(),
            to_phone: "+15550002222".to_owned(),
        };
        let message = OutgoingMessage::from(row);
        assert_eq!(message.to_user.username, "bob");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["to_user"]["first_name"], "Bob");
        assert!(json.get("from_user").is_none());
    }
}
