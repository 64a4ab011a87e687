// 인증 모듈

/// 토큰 발급/검증 (jsonwebtoken)
pub mod jwt;

/// 인증 미들웨어
pub mod middleware;

/// 비밀번호 해시/검증 (argon2)
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::require_auth;
