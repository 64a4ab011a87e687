//! 쓰기 라우트 인증 미들웨어.
//!
//! `Authorization: Bearer <token>` 을 검증하고 `Claims` 를 request
//! extensions 에 넣는다. 핸들러는 `Extension<Claims>` 로 꺼내 쓴다.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::AccessDenied)?;
    let raw = header.to_str().map_err(|_| AppError::InvalidToken)?;
    if raw.is_empty() {
        return Err(AppError::AccessDenied);
    }

    // 접두어 없이 토큰만 보내는 클라이언트도 허용
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let claims = state.jwt.verify(token).map_err(|e| {
        warn!("{:<12} --> 토큰 검증 실패: {}", "Auth", e);
        AppError::InvalidToken
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
