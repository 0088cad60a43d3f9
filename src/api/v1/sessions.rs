use crate::api::{ApiJson, RequestContext};
use crate::common::auth;
use crate::common::error::{AppError, ServiceResponse};
use crate::models::sessions::{LoginArgs, RegisterArgs, RegisteredResponse, TokenResponse};
use crate::settings::AppSettings;
use crate::usecases::users;
use axum::Json;

pub async fn register(
    ctx: RequestContext,
    ApiJson(args): ApiJson<RegisterArgs>,
) -> ServiceResponse<RegisteredResponse> {
    let settings = AppSettings::get();
    let user = users::register(&ctx, args).await?;
    users::record_login(&ctx, &user.username).await?;
    let token = auth::issue_token(&user.username, &settings.jwt_secret, settings.token_expiry)?;
    Ok(Json(RegisteredResponse { token, user }))
}

pub async fn login(
    ctx: RequestContext,
    ApiJson(args): ApiJson<LoginArgs>,
) -> ServiceResponse<TokenResponse> {
    let settings = AppSettings::get();
    let authenticated = match users::authenticate(&ctx, &args.username, &args.password).await {
        // the surface must not reveal whether the username exists
        Err(AppError::UsersNotFound) => false,
        other => other?,
    };
    if !authenticated {
        return Err(AppError::UsersInvalidCredentials);
    }
    users::record_login(&ctx, &args.username).await?;
    let token = auth::issue_token(&args.username, &settings.jwt_secret, settings.token_expiry)?;
    Ok(Json(TokenResponse { token }))
}
