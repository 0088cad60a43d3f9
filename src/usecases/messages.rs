use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected, unwrap_expect};
use crate::models::messages::{Message, ReadReceipt, SentMessage};
use crate::repositories::{messages, users};

pub const MAX_BODY_LENGTH: usize = 5000;

fn validate_body(body: &str) -> ServiceResult<()> {
    if body.is_empty() || body.len() > MAX_BODY_LENGTH {
        return Err(AppError::MessagesInvalidLength);
    }
    Ok(())
}

pub async fn create<C: Context>(
    ctx: &C,
    from_username: &str,
    to_username: &str,
    body: &str,
) -> ServiceResult<SentMessage> {
    validate_body(body)?;
    if !users::exists(ctx, from_username).await? || !users::exists(ctx, to_username).await? {
        return Err(AppError::UsersNotFound);
    }
    let message = unwrap_expect! {
        messages::create(ctx, from_username, to_username, body).await,
        // either user deleted between the check and the insert
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() =>
            return Err(AppError::UsersNotFound)
    };
    Ok(SentMessage::from(message))
}

pub async fn fetch_one<C: Context>(
    ctx: &C,
    message_id: i64,
    requesting_username: &str,
) -> ServiceResult<Message> {
    let message = unwrap_expect! {
        messages::fetch_one(ctx, message_id).await,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::MessagesNotFound)
    };
    if message.from_username != requesting_username && message.to_username != requesting_username {
        return Err(AppError::MessagesNotParticipant);
    }
    Ok(Message::from(message))
}

/// read_at transitions NULL -> now exactly once, and only for the recipient.
pub async fn mark_read<C: Context>(
    ctx: &C,
    message_id: i64,
    requesting_username: &str,
) -> ServiceResult<ReadReceipt> {
    let message = unwrap_expect! {
        messages::fetch_one(ctx, message_id).await,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::MessagesNotFound)
    };
    if message.to_username != requesting_username {
        return Err(AppError::MessagesNotRecipient);
    }
    if message.read_at.is_some() {
        return Err(AppError::MessagesAlreadyRead);
    }
    match messages::mark_read(ctx, message_id).await {
        Ok(Some(read_at)) => Ok(ReadReceipt {
            id: message_id,
            read_at,
        }),
        // lost a race against a concurrent mark; the receipt was still set once
        Ok(None) => Err(AppError::MessagesAlreadyRead),
        Err(e) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_are_bounded_and_non_empty() {
        assert!(validate_body("hi").is_ok());
        assert!(validate_body("").is_err());
        assert!(validate_body(&"x".repeat(MAX_BODY_LENGTH)).is_ok());
        assert!(validate_body(&"x".repeat(MAX_BODY_LENGTH + 1)).is_err());
    }
}
