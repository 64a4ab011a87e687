use chrono::{DateTime, Utc};
use serde::Deserialize;

// 입찰 요청 본문
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub bid_amount: Option<f64>,
}

// 조건부 입찰 갱신
#[derive(Debug, Clone)]
pub struct BidUpdate {
    pub auction_id: i64,
    pub amount: f64,
    pub bidder_id: String,
    pub placed_at: DateTime<Utc>,
}
