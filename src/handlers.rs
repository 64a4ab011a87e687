// region:    --- Imports
use crate::auction::commands::{
    handle_create_auction as command_create_auction, CreateAuctionCommand,
};
use crate::auth::Claims;
use crate::bidding::commands::{handle_place_bid as command_place_bid, PlaceBidCommand};
use crate::bidding::model::BidRequest;
use crate::error::AppError;
use crate::query;
use crate::state::AppState;
use crate::user::commands::{
    handle_signin as command_signin, handle_signup as command_signup, SigninCommand,
};
use crate::user::model::SignupCommand;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::Utc;
use serde_json::json;
use tracing::info;

// endregion: --- Imports

// region:    --- Command Handlers

/// 회원가입
pub async fn handle_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupCommand>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(cmd) = payload?;
    command_signup(state.store.as_ref(), cmd).await?;
    Ok(Json(json!({ "message": "User registered successfully" })))
}

/// 로그인
pub async fn handle_signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninCommand>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(cmd) = payload?;
    let token = command_signin(state.store.as_ref(), &state.jwt, cmd).await?;
    Ok(Json(json!({ "message": "Login successful", "token": token })))
}

/// 경매 생성 (인증 필요)
pub async fn handle_create_auction(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateAuctionCommand>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "{:<12} --> 경매 생성 요청: userId={}",
        "Command", claims.user_id
    );
    let Json(cmd) = payload.map_err(|_| AppError::AuctionCreation)?;
    command_create_auction(state.store.as_ref(), cmd).await?;
    Ok(Json(json!({ "message": "Auction created successfully" })))
}

/// 입찰 (인증 필요)
pub async fn handle_place_bid(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<BidRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // 본문 오류는 경매 조회 뒤에 판단한다
    let bid_amount = payload.ok().and_then(|Json(body)| body.bid_amount);
    let cmd = PlaceBidCommand {
        auction_id,
        bidder_id: claims.user_id,
        bid_amount,
    };
    command_place_bid(state.store.as_ref(), cmd, Utc::now()).await?;
    Ok(Json(json!({ "message": "Bid placed successfully" })))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn handle_get_auctions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 모든 경매 조회", "HandlerQuery");
    let auctions = query::handlers::get_all_auctions(state.store.as_ref()).await?;
    Ok(Json(auctions))
}

/// 경매 조회
pub async fn handle_get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    info!("{:<12} --> 경매 조회 id: {}", "HandlerQuery", auction_id);
    let auction = query::handlers::get_auction(state.store.as_ref(), &auction_id).await?;
    Ok(Json(auction))
}

// endregion: --- Query Handlers
