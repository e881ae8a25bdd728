//! Registration, login and profile routes

use axum::{
    Extension, Form, Json, async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use common::error::DatabaseError;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::JsonBody,
    models::{LoginRequest, NewUser, RegisterRequest, TokenResponse, User, UserResponse},
    password::{DUMMY_PASSWORD_HASH, hash_password, verify_password},
    validation::validate_registration,
};

/// Login credentials read from either an urlencoded or a multipart form
pub struct LoginForm(pub LoginRequest);

#[async_trait]
impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(login) = Form::<LoginRequest>::from_request(req, state).await?;
            return Ok(LoginForm(login));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::Rejected(e.status(), e.body_text()))?;

        let mut username = None;
        let mut password = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?
        {
            let slot = match field.name() {
                Some("username") => &mut username,
                Some("password") => &mut password,
                _ => continue,
            };
            *slot = Some(
                field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?,
            );
        }

        match (username, password) {
            (Some(username), Some(password)) => Ok(LoginForm(LoginRequest { username, password })),
            _ => Err(ApiError::Validation(
                "Both username and password are required".to_string(),
            )),
        }
    }
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let role = validate_registration(&payload).map_err(ApiError::Validation)?;

    if state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = hash_password(&payload.password)?;
    let new_user = NewUser {
        email: payload.email,
        full_name: payload.full_name,
        role,
        password_hash,
    };

    let user = state
        .user_repository
        .create(&new_user)
        .await
        .map_err(|e| match e {
            DatabaseError::UniqueViolation(_) => {
                ApiError::BadRequest("Email already registered".to_string())
            }
            other => ApiError::Database(other),
        })?;

    info!("Registered user {} as {}", user.id, user.role);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    LoginForm(form): LoginForm,
) -> ApiResult<Json<TokenResponse>> {
    info!("Login attempt for user: {}", form.username);

    let user = state.user_repository.find_by_email(&form.username).await?;

    // Unknown emails still pay for one verification.
    let verified = match &user {
        Some(user) => verify_password(&form.password, &user.password_hash),
        None => {
            verify_password(&form.password, DUMMY_PASSWORD_HASH);
            false
        }
    };

    let user = user.filter(|_| verified).ok_or_else(|| {
        warn!("Rejected login for {}", form.username);
        ApiError::Unauthorized("Incorrect email or password".to_string())
    })?;

    let access_token = state.jwt_service.generate_access_token(&user)?;

    Ok(Json(TokenResponse::bearer(access_token)))
}

/// Profile of the authenticated user
pub async fn me(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
