/// 경매 생성 커맨드 처리
// region:    --- Imports
use super::model::{Auction, EndTimeInput, NewAuction};
use crate::error::AppError;
use crate::store::AuctionStore;
use serde::Deserialize;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Commands
/// 경매 생성 명령
///
/// 입찰 상태 필드(currentBid, highestBidder, isClosed)는 받지 않는다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<f64>,
    pub end_time: Option<EndTimeInput>,
}

/// 경매 생성. 실패 원인과 무관하게 같은 오류를 돌려준다.
pub async fn handle_create_auction<S>(
    store: &S,
    cmd: CreateAuctionCommand,
) -> Result<Auction, AppError>
where
    S: AuctionStore + ?Sized,
{
    info!("{:<12} --> 경매 생성 요청 처리 시작: {:?}", "Command", cmd);

    let new_auction = NewAuction::validate(cmd).ok_or(AppError::AuctionCreation)?;

    let auction = store.insert_auction(new_auction).await.map_err(|e| {
        error!("{:<12} --> 경매 저장 실패: {}", "Command", e);
        AppError::AuctionCreation
    })?;

    info!(
        "{:<12} --> 경매 생성 완료: id={}, 마감={}",
        "Command", auction.id, auction.end_time
    );
    Ok(auction)
}

// endregion: --- Commands
