use crate::common::context::Context;
use crate::entities::users::{User, UserInfo};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str =
    "username, password_hash, first_name, last_name, phone, joined_at, last_login_at";
const INFO_FIELDS: &str = "username, first_name, last_name, phone";

pub struct CreateUserParams<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
}

pub async fn create<C: Context>(ctx: &C, params: CreateUserParams<'_>) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (username, password_hash, first_name, last_name, phone, joined_at) ",
        "VALUES ($1, $2, $3, $4, $5, NOW()) RETURNING ",
        READ_FIELDS
    );
    sqlx::query_as(QUERY)
        .bind(params.username)
        .bind(params.password_hash)
        .bind(params.first_name)
        .bind(params.last_name)
        .bind(params.phone)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one<C: Context>(ctx: &C, username: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE username = $1"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<UserInfo>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        INFO_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY username"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn exists<C: Context>(ctx: &C, username: &str) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT EXISTS (SELECT 1 FROM ",
        TABLE_NAME,
        " WHERE username = $1)"
    );
    sqlx::query_scalar(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

pub async fn record_login<C: Context>(ctx: &C, username: &str) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET last_login_at = NOW() WHERE username = $1"
    );
    let result = sqlx::query(QUERY).bind(username).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}
