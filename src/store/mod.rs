/// 저장소 추상화
/// 핸들러는 구현체(Postgres 등)를 모르고 트레이트로만 접근한다.
// region:    --- Imports
use crate::auction::model::{Auction, NewAuction};
use crate::bidding::model::BidUpdate;
use crate::user::model::{HashedUser, User};
use async_trait::async_trait;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Store Error
#[derive(Debug, Error)]
pub enum StoreError {
    /// 유니크 제약 위반. 메시지는 클라이언트에 그대로 노출된다.
    #[error("{0}")]
    Duplicate(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn duplicate_email(email: &str) -> Self {
        StoreError::Duplicate(format!(
            "duplicate key error: email \"{}\" is already registered",
            email
        ))
    }
}

// endregion: --- Store Error

// region:    --- Store Traits
/// 사용자 저장소 트레이트
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일이 이미 있으면 `StoreError::Duplicate`
    async fn insert_user(&self, user: HashedUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore: Send + Sync {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, StoreError>;

    /// 생성 순서대로 전체 경매 조회
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError>;

    async fn find_auction(&self, id: i64) -> Result<Option<Auction>, StoreError>;

    /// 마감 처리 (isClosed = true)
    async fn close_auction(&self, id: i64) -> Result<(), StoreError>;

    /// 조건부 입찰 갱신
    ///
    /// 저장된 경매가 아직 마감 시각 전이고 `Auction::accepts_bid` 조건을
    /// 만족할 때만 현재가와 최고 입찰자를 원자적으로 갱신한다.
    /// 갱신된 행이 없으면 `false`.
    async fn raise_bid(&self, bid: &BidUpdate) -> Result<bool, StoreError>;
}

/// 서버가 사용하는 전체 저장소
pub trait Store: UserStore + AuctionStore {}

impl<T: UserStore + AuctionStore> Store for T {}

// endregion: --- Store Traits
