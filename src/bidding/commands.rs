/// 입찰 커맨드 처리
// region:    --- Imports
use super::model::BidUpdate;
use crate::auction::model::parse_auction_id;
use crate::error::AppError;
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: String,
    pub bidder_id: String,
    pub bid_amount: Option<f64>,
}

/// 입찰
///
/// 1. 경매 조회 (없으면 실패)
/// 2. 마감 시각이 지났으면 마감 처리 후 실패
/// 3. 현재가보다 높으면 조건부 갱신
///
/// 3단계는 저장소에서 원자적으로 다시 조건을 확인하므로 조회 이후
/// 다른 요청이 더 높은 가격으로 먼저 갱신했다면 여기서 실패한다.
pub async fn handle_place_bid<S>(
    store: &S,
    cmd: PlaceBidCommand,
    now: DateTime<Utc>,
) -> Result<(), AppError>
where
    S: AuctionStore + ?Sized,
{
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let auction_id = parse_auction_id(&cmd.auction_id).ok_or(AppError::AuctionNotFound)?;
    let auction = store
        .find_auction(auction_id)
        .await?
        .ok_or(AppError::AuctionNotFound)?;

    if auction.is_expired_at(now) {
        store.close_auction(auction.id).await?;
        info!("{:<12} --> 마감된 경매 입찰 시도: id={}", "Command", auction.id);
        return Err(AppError::AuctionClosed);
    }

    let amount = cmd
        .bid_amount
        .filter(|a| a.is_finite())
        .ok_or(AppError::InvalidBidAmount)?;

    if !auction.accepts_bid(amount) {
        return Err(AppError::BidTooLow);
    }

    let update = BidUpdate {
        auction_id: auction.id,
        amount,
        bidder_id: cmd.bidder_id,
        placed_at: now,
    };

    if store.raise_bid(&update).await? {
        info!(
            "{:<12} --> 입찰 성공: id={}, 현재가 {}",
            "Command", update.auction_id, update.amount
        );
        Ok(())
    } else {
        warn!(
            "{:<12} --> 조건부 갱신 실패: 다른 입찰이 먼저 반영됨 (id={})",
            "Command", update.auction_id
        );
        Err(AppError::BidTooLow)
    }
}

// endregion: --- Commands
