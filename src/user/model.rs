use crate::auth::password;
use serde::Deserialize;

// 사용자 모델
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2 PHC 해시 문자열
    pub password: String,
}

// 회원가입 입력 (검증 전)
#[derive(Deserialize)]
pub struct SignupCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 검증된 신규 사용자. 비밀번호는 아직 평문.
pub struct NewUser {
    pub username: String,
    pub email: String,
    password: String,
}

/// 저장 가능한 신규 사용자. 평문 비밀번호는 남아있지 않다.
#[derive(Debug, Clone)]
pub struct HashedUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// 필수 필드 검증. 누락 필드는 스키마 순서대로 한 메시지에 모은다.
    pub fn validate(cmd: SignupCommand) -> Result<Self, String> {
        let username = required(cmd.username);
        let email = required(cmd.email);
        let password = required(cmd.password);

        let missing: Vec<String> = [
            ("username", username.is_none()),
            ("email", email.is_none()),
            ("password", password.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(field, _)| format!("{}: Path `{}` is required.", field, field))
        .collect();

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) => Ok(Self {
                username,
                email,
                password,
            }),
            _ => Err(format!("User validation failed: {}", missing.join(", "))),
        }
    }

    /// 저장 전 비밀번호 해시. 소유권을 넘겨받으므로 한 번만 호출된다.
    pub fn hash_password(self) -> Result<HashedUser, argon2::password_hash::Error> {
        let password_hash = password::hash_password(&self.password)?;
        Ok(HashedUser {
            username: self.username,
            email: self.email,
            password_hash,
        })
    }
}

/// 빈 문자열은 누락으로 본다
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
