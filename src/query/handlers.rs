// region:    --- Imports
use crate::auction::model::{parse_auction_id, Auction};
use crate::error::AppError;
use crate::store::AuctionStore;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn get_all_auctions<S>(store: &S) -> Result<Vec<Auction>, AppError>
where
    S: AuctionStore + ?Sized,
{
    info!("{:<12} --> 모든 경매 조회", "Query");
    Ok(store.list_auctions().await?)
}

/// 경매 조회
pub async fn get_auction<S>(store: &S, raw_id: &str) -> Result<Auction, AppError>
where
    S: AuctionStore + ?Sized,
{
    info!("{:<12} --> 경매 조회 id: {}", "Query", raw_id);
    let auction_id = parse_auction_id(raw_id).ok_or(AppError::AuctionNotFound)?;
    store
        .find_auction(auction_id)
        .await?
        .ok_or(AppError::AuctionNotFound)
}

// endregion: --- Query Handlers
