use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected, unwrap_expect};
use crate::models::messages::{IncomingMessage, OutgoingMessage};
use crate::models::sessions::RegisterArgs;
use crate::models::users::{User, UserInfo};
use crate::repositories::users::CreateUserParams;
use crate::repositories::{messages, users};
use crate::settings::AppSettings;

pub const MAX_USERNAME_LENGTH: usize = 50;

fn validate_username(username: &str) -> ServiceResult<()> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if username.is_empty() || username.len() > MAX_USERNAME_LENGTH || !valid_chars {
        return Err(AppError::UsersInvalidUsername);
    }
    Ok(())
}

pub async fn register<C: Context>(ctx: &C, args: RegisterArgs) -> ServiceResult<User> {
    validate_username(&args.username)?;
    if args.password.is_empty() {
        return Err(AppError::UsersInvalidPassword);
    }

    let password_hash = bcrypt::hash(&args.password, AppSettings::get().password_hash_cost)?;
    let user = unwrap_expect! {
        users::create(ctx, CreateUserParams {
            username: &args.username,
            password_hash: &password_hash,
            first_name: &args.first_name,
            last_name: &args.last_name,
            phone: &args.phone,
        }).await,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() =>
            return Err(AppError::UsersAlreadyExists)
    };
    Ok(User::from(user))
}

/// Checks a plaintext password against the stored hash. Mutates nothing;
/// recording the login is the caller's decision.
pub async fn authenticate<C: Context>(
    ctx: &C,
    username: &str,
    password: &str,
) -> ServiceResult<bool> {
    let user = unwrap_expect! {
        users::fetch_one(ctx, username).await,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound)
    };
    Ok(bcrypt::verify(password, &user.password_hash)?)
}

pub async fn record_login<C: Context>(ctx: &C, username: &str) -> ServiceResult<()> {
    match users::record_login(ctx, username).await {
        Ok(0) => Err(AppError::UsersNotFound),
        Ok(_) => Ok(()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<UserInfo>> {
    match users::fetch_all(ctx).await {
        Ok(users) => Ok(users.into_iter().map(UserInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, username: &str) -> ServiceResult<User> {
    match users::fetch_one(ctx, username).await {
        Ok(user) => Ok(User::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn messages_from<C: Context>(
    ctx: &C,
    username: &str,
) -> ServiceResult<Vec<OutgoingMessage>> {
    if !users::exists(ctx, username).await? {
        return Err(AppError::UsersNotFound);
    }
    match messages::fetch_from(ctx, username).await {
        Ok(rows) => Ok(rows.into_iter().map(OutgoingMessage::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn messages_to<C: Context>(
    ctx: &C,
    username: &str,
) -> ServiceResult<Vec<IncomingMessage>> {
    if !users::exists(ctx, username).await? {
        return Err(AppError::UsersNotFound);
    }
    match messages::fetch_to(ctx, username).await {
        Ok(rows) => Ok(rows.into_iter().map(IncomingMessage::from).collect()),
        Err(e) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_are_bounded_and_clean() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("alice_01.test-x").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("semi;colon").is_err());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH)).is_ok());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn hashes_verify_against_the_original_password_only() {
        // low cost keeps the test fast; the production cost comes from settings
        let hash = bcrypt::hash("secret-pw", 4).unwrap();
        assert_ne!(hash, "secret-pw");
        assert!(bcrypt::verify("secret-pw", &hash).unwrap());
        assert!(!bcrypt::verify("other-pw", &hash).unwrap());
    }
}
