use crate::api::{ApiJson, RequestContext};
use crate::common::auth::AuthUser;
use crate::common::error::ServiceResponse;
use crate::models::messages::{
    MessageCreatedResponse, MessageDetailResponse, MessageReadResponse, SendMessageArgs,
};
use crate::usecases::messages;
use axum::Json;
use axum::extract::Path;

pub async fn get(
    ctx: RequestContext,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ServiceResponse<MessageDetailResponse> {
    let message = messages::fetch_one(&ctx, id, &auth.username).await?;
    Ok(Json(MessageDetailResponse { message }))
}

pub async fn create(
    ctx: RequestContext,
    auth: AuthUser,
    ApiJson(args): ApiJson<SendMessageArgs>,
) -> ServiceResponse<MessageCreatedResponse> {
    let message = messages::create(&ctx, &auth.username, &args.to_username, &args.body).await?;
    Ok(Json(MessageCreatedResponse { message }))
}

pub async fn mark_read(
    ctx: RequestContext,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ServiceResponse<MessageReadResponse> {
    let message = messages::mark_read(&ctx, id, &auth.username).await?;
    Ok(Json(MessageReadResponse { message }))
}
