/// 회원 관련 커맨드 처리
/// 1. 회원가입
/// 2. 로그인
// region:    --- Imports
use super::model::{NewUser, SignupCommand, User};
use crate::auth::password::verify_password;
use crate::auth::JwtService;
use crate::error::AppError;
use crate::store::UserStore;
use serde::Deserialize;
use tokio::task;
use tracing::info;

// endregion: --- Imports

// region:    --- Commands
/// 로그인 명령
#[derive(Deserialize)]
pub struct SigninCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 1. 회원가입
pub async fn handle_signup<S>(store: &S, cmd: SignupCommand) -> Result<User, AppError>
where
    S: UserStore + ?Sized,
{
    info!(
        "{:<12} --> 회원가입 요청 처리 시작: email={:?}",
        "Command", cmd.email
    );

    let new_user = NewUser::validate(cmd).map_err(AppError::Validation)?;
    // Argon2 는 CPU 를 오래 점유하므로 블로킹 풀에서 실행
    let hashed = task::spawn_blocking(move || new_user.hash_password())
        .await
        .map_err(|e| AppError::Internal(format!("hash task: {}", e)))?
        .map_err(|e| AppError::Internal(format!("password hash: {}", e)))?;

    let user = store.insert_user(hashed).await?;
    info!("{:<12} --> 회원가입 완료: id={}", "Command", user.id);
    Ok(user)
}

/// 2. 로그인. 성공 시 서명된 토큰 반환
pub async fn handle_signin<S>(
    store: &S,
    jwt: &JwtService,
    cmd: SigninCommand,
) -> Result<String, AppError>
where
    S: UserStore + ?Sized,
{
    let email = cmd.email.unwrap_or_default();
    info!("{:<12} --> 로그인 요청 처리 시작: email={}", "Command", email);

    let user = store
        .find_user_by_email(&email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let password = cmd.password.unwrap_or_default();
    let hash = user.password.clone();
    let matches = task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verify task: {}", e)))?;
    if !matches {
        return Err(AppError::InvalidCredentials);
    }

    jwt.issue(&user.id.to_string())
        .map_err(|e| AppError::Internal(format!("token encode: {}", e)))
}

// endregion: --- Commands
