#![allow(dead_code)]

use async_trait::async_trait;
use auction_backend::auction::model::{Auction, NewAuction};
use auction_backend::auth::JwtService;
use auction_backend::bidding::model::BidUpdate;
use auction_backend::routes::routes;
use auction_backend::state::AppState;
use auction_backend::store::{AuctionStore, StoreError, UserStore};
use auction_backend::user::model::{HashedUser, User};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-jwt-secret";

// region:    --- Memory Store
/// 테스트용 인메모리 저장소
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    auctions: Vec<Auction>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStore {
    pub fn user_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.iter().find(|u| u.email == email).cloned()
    }

    pub fn auction(&self, id: i64) -> Option<Auction> {
        let inner = self.inner.lock().unwrap();
        inner.auctions.iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: HashedUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate_email(&user.email));
        }
        let user = User {
            id: inner.next_id(),
            username: user.username,
            email: user.email,
            password: user.password_hash,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.user_by_email(email))
    }
}

#[async_trait]
impl AuctionStore for MemoryStore {
    async fn insert_auction(&self, auction: NewAuction) -> Result<Auction, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let auction = Auction {
            id: inner.next_id(),
            name: auction.name,
            description: auction.description,
            starting_bid: auction.starting_bid,
            current_bid: None,
            highest_bidder: None,
            end_time: auction.end_time,
            is_closed: false,
        };
        inner.auctions.push(auction.clone());
        Ok(auction)
    }

    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        Ok(self.inner.lock().unwrap().auctions.clone())
    }

    async fn find_auction(&self, id: i64) -> Result<Option<Auction>, StoreError> {
        Ok(self.auction(id))
    }

    async fn close_auction(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(auction) = inner.auctions.iter_mut().find(|a| a.id == id) {
            auction.is_closed = true;
        }
        Ok(())
    }

    async fn raise_bid(&self, bid: &BidUpdate) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.auctions.iter_mut().find(|a| a.id == bid.auction_id) {
            Some(auction)
                if !auction.is_expired_at(bid.placed_at) && auction.accepts_bid(bid.amount) =>
            {
                auction.current_bid = Some(bid.amount);
                auction.highest_bidder = Some(bid.bidder_id.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

// endregion: --- Memory Store

// region:    --- Failing Store
/// 모든 호출이 백엔드 오류로 끝나는 저장소
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Backend("connection refused".into())
}

#[async_trait]
impl UserStore for FailingStore {
    async fn insert_user(&self, _user: HashedUser) -> Result<User, StoreError> {
        Err(down())
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(down())
    }
}

#[async_trait]
impl AuctionStore for FailingStore {
    async fn insert_auction(&self, _auction: NewAuction) -> Result<Auction, StoreError> {
        Err(down())
    }

    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        Err(down())
    }

    async fn find_auction(&self, _id: i64) -> Result<Option<Auction>, StoreError> {
        Err(down())
    }

    async fn close_auction(&self, _id: i64) -> Result<(), StoreError> {
        Err(down())
    }

    async fn raise_bid(&self, _bid: &BidUpdate) -> Result<bool, StoreError> {
        Err(down())
    }
}

/// 저장소가 내려간 상태의 라우터
pub fn failing_app() -> TestApp {
    let jwt = JwtService::new(TEST_SECRET, 3600);
    let state = AppState::new(Arc::new(FailingStore), jwt.clone());
    TestApp {
        router: routes(state),
        store: Arc::new(MemoryStore::default()),
        jwt,
    }
}

// endregion: --- Failing Store

// region:    --- Test App
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub jwt: JwtService,
}

pub fn app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let jwt = JwtService::new(TEST_SECRET, 3600);
    let state = AppState::new(store.clone(), jwt.clone());
    TestApp {
        router: routes(state),
        store,
        jwt,
    }
}

pub async fn call(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    send(router, builder.body(body).unwrap()).await
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&bytes).unwrap_or(json!(null))
    };
    (status, json)
}

impl TestApp {
    pub async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        call(&self.router, method, uri, token, body).await
    }

    /// 가입 후 로그인해서 토큰 반환
    pub async fn register(&self, email: &str, password: &str) -> String {
        let (status, _) = self
            .call(
                "POST",
                "/signup",
                None,
                Some(json!({ "username": "tester", "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self
            .call(
                "POST",
                "/signin",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    /// 경매 생성 후 id 반환
    pub async fn create_auction(&self, token: &str, name: &str, end_time: DateTime<Utc>) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/auction",
                Some(token),
                Some(json!({
                    "name": name,
                    "description": format!("{} 설명", name),
                    "startingBid": 10,
                    "endTime": end_time.to_rfc3339(),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");

        let (_, auctions) = self.call("GET", "/auctions", None, None).await;
        let last = auctions.as_array().unwrap().last().unwrap();
        last["_id"].as_str().unwrap().to_string()
    }
}

// endregion: --- Test App
