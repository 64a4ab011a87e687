// region:    --- Imports
use crate::auction::model::{Auction, NewAuction};
use crate::bidding::model::BidUpdate;
use crate::config::Config;
use crate::query::queries;
use crate::store::{AuctionStore, StoreError, UserStore};
use crate::user::model::{HashedUser, User};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Database Manager
pub struct DatabaseManager {
    pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;
        info!(
            "{:<12} --> 커넥션 풀 생성 (max={})",
            "Database", config.database_max_connections
        );
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 스키마 생성 (이미 있으면 유지)
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

// endregion: --- Database Manager

// region:    --- User Store
#[async_trait]
impl UserStore for DatabaseManager {
    async fn insert_user(&self, user: HashedUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return StoreError::duplicate_email(&user.email);
                }
            }
            backend(e)
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(queries::GET_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&*self.pool)
            .await
            .map_err(backend)
    }
}

// endregion: --- User Store

// region:    --- Auction Store
#[async_trait]
impl AuctionStore for DatabaseManager {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, StoreError> {
        sqlx::query_as::<_, Auction>(
            "INSERT INTO auctions (name, description, starting_bid, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, starting_bid, current_bid, highest_bidder, end_time, is_closed",
        )
        .bind(&auction.name)
        .bind(&auction.description)
        .bind(auction.starting_bid)
        .bind(auction.end_time)
        .fetch_one(&*self.pool)
        .await
        .map_err(backend)
    }

    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        sqlx::query_as::<_, Auction>(queries::GET_ALL_AUCTIONS)
            .fetch_all(&*self.pool)
            .await
            .map_err(backend)
    }

    async fn find_auction(&self, id: i64) -> Result<Option<Auction>, StoreError> {
        sqlx::query_as::<_, Auction>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(backend)
    }

    async fn close_auction(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("UPDATE auctions SET is_closed = TRUE WHERE id = $1")
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn raise_bid(&self, bid: &BidUpdate) -> Result<bool, StoreError> {
        // Auction::accepts_bid 와 같은 조건을 갱신 시점에 다시 확인
        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE auctions SET current_bid = $1, highest_bidder = $2
            WHERE id = $3
              AND end_time >= $4
              AND (current_bid IS NULL OR current_bid = 0 OR current_bid < $1)
            RETURNING id",
        )
        .bind(bid.amount)
        .bind(&bid.bidder_id)
        .bind(bid.auction_id)
        .bind(bid.placed_at)
        .fetch_optional(&*self.pool)
        .await
        .map_err(backend)?;

        Ok(updated.is_some())
    }
}

// endregion: --- Auction Store
