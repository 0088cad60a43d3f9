use crate::common::context::Context;
use crate::entities::messages::{IncomingMessage, Message, MessageWithUsers, OutgoingMessage};
use chrono::{DateTime, Utc};

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, from_username, to_username, body, sent_at, read_at";

pub async fn create<C: Context>(
    ctx: &C,
    from_username: &str,
    to_username: &str,
    body: &str,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (from_username, to_username, body, sent_at) ",
        "VALUES ($1, $2, $3, NOW()) RETURNING ",
        READ_FIELDS
    );
    sqlx::query_as(QUERY)
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<MessageWithUsers> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.body, m.sent_at, m.read_at, ",
        "m.from_username, f.first_name AS from_first_name, ",
        "f.last_name AS from_last_name, f.phone AS from_phone, ",
        "m.to_username, t.first_name AS to_first_name, ",
        "t.last_name AS to_last_name, t.phone AS to_phone ",
        "FROM ",
        TABLE_NAME,
        " m ",
        "INNER JOIN users f ON m.from_username = f.username ",
        "INNER JOIN users t ON m.to_username = t.username ",
        "WHERE m.id = $1"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

/// Sets the read receipt if it is not already set. Returns the new read_at,
/// or `None` when the message was missing or already read.
pub async fn mark_read<C: Context>(
    ctx: &C,
    message_id: i64,
) -> sqlx::Result<Option<DateTime<Utc>>> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET read_at = NOW() WHERE id = $1 AND read_at IS NULL RETURNING read_at"
    );
    sqlx::query_scalar(QUERY)
        .bind(message_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_from<C: Context>(ctx: &C, username: &str) -> sqlx::Result<Vec<OutgoingMessage>> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.body, m.sent_at, m.read_at, ",
        "m.to_username, u.first_name AS to_first_name, ",
        "u.last_name AS to_last_name, u.phone AS to_phone ",
        "FROM ",
        TABLE_NAME,
        " m INNER JOIN users u ON m.to_username = u.username ",
        "WHERE m.from_username = $1 ORDER BY m.sent_at, m.id"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_to<C: Context>(ctx: &C, username: &str) -> sqlx::Result<Vec<IncomingMessage>> {
    const QUERY: &str = const_str::concat!(
        "SELECT m.id, m.body, m.sent_at, m.read_at, ",
        "m.from_username, u.first_name AS from_first_name, ",
        "u.last_name AS from_last_name, u.phone AS from_phone ",
        "FROM ",
        TABLE_NAME,
        " m INNER JOIN users u ON m.from_username = u.username ",
        "WHERE m.to_username = $1 ORDER BY m.sent_at, m.id"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_all(ctx.db())
        .await
}
