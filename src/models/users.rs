use crate::entities::users::{User as UserEntity, UserInfo as UserInfoEntity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public profile of a user. The password hash never leaves the entity.
#[derive(Debug, Serialize)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub joined_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            joined_at: value.joined_at,
            last_login_at: value.last_login_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<UserInfoEntity> for UserInfo {
    fn from(value: UserInfoEntity) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
        }
    }
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_entity() -> UserEntity {
        UserEntity {
            username: "alice".to_owned(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_owned(),
            first_name: "Alice".to_owned(),
            last_name: "Adams".to_owned(),
            phone: "+15550001111".to_owned(),
            joined_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn profile_never_serializes_the_password_hash() {
        let user = User::from(user_entity());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["first_name"], "Alice");
    }

    #[test]
    fn profile_keeps_the_login_timestamps() {
        let mut entity = user_entity();
        let now = Utc::now();
        entity.last_login_at = Some(now);
        let user = User::from(entity);
        assert_eq!(user.last_login_at, Some(now));
    }
}
