use crate::api::RequestContext;
use crate::common::auth::AuthUser;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::messages::{IncomingMessagesResponse, OutgoingMessagesResponse};
use crate::models::users::{UserResponse, UsersResponse};
use crate::usecases::users;
use axum::Json;
use axum::extract::Path;

pub async fn list(ctx: RequestContext, _auth: AuthUser) -> ServiceResponse<UsersResponse> {
    let users = users::fetch_all(&ctx).await?;
    Ok(Json(UsersResponse { users }))
}

pub async fn get(
    ctx: RequestContext,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ServiceResponse<UserResponse> {
    let user = users::fetch_one(&ctx, &username).await?;
    Ok(Json(UserResponse { user }))
}

pub async fn messages_to(
    ctx: RequestContext,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ServiceResponse<IncomingMessagesResponse> {
    if auth.username != username {
        return Err(AppError::UsersForbidden);
    }
    let messages = users::messages_to(&ctx, &username).await?;
    Ok(Json(IncomingMessagesResponse { messages }))
}

pub async fn messages_from(
    ctx: RequestContext,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ServiceResponse<OutgoingMessagesResponse> {
    if auth.username != username {
        return Err(AppError::UsersForbidden);
    }
    let messages = users::messages_from(&ctx, &username).await?;
    Ok(Json(OutgoingMessagesResponse { messages }))
}
