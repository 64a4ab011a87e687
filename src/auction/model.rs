use super::commands::CreateAuctionCommand;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

// 경매 모델
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(rename = "_id", serialize_with = "serialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub starting_bid: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_bidder: Option<String>,
    pub end_time: DateTime<Utc>,
    pub is_closed: bool,
}

fn serialize_id<S: Serializer>(id: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

impl Auction {
    /// 마감 시각이 지났는지
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.end_time
    }

    /// 현재가가 없거나(0 포함) 입찰가가 현재가보다 높으면 수락
    pub fn accepts_bid(&self, amount: f64) -> bool {
        match self.current_bid {
            Some(current) if current != 0.0 => amount > current,
            _ => true,
        }
    }
}

/// 경로 파라미터의 경매 id. 숫자가 아니면 존재하지 않는 경매로 취급한다.
pub fn parse_auction_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}

// 마감 시각 입력: epoch 밀리초 또는 날짜 문자열
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EndTimeInput {
    Millis(i64),
    Text(String),
}

impl EndTimeInput {
    /// RFC 3339, 시간대 없는 `YYYY-MM-DDTHH:MM[:SS]`(UTC), `YYYY-MM-DD` 지원
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            EndTimeInput::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            EndTimeInput::Text(text) => {
                let text = text.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                    return Some(dt.with_timezone(&Utc));
                }
                ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                    .or_else(|| {
                        NaiveDate::parse_from_str(text, "%Y-%m-%d")
                            .ok()
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                    })
                    .map(|naive| naive.and_utc())
            }
        }
    }
}

/// 검증된 신규 경매. 입찰 상태 필드는 포함하지 않는다.
#[derive(Debug, Clone)]
pub struct NewAuction {
    pub name: String,
    pub description: Option<String>,
    pub starting_bid: f64,
    pub end_time: DateTime<Utc>,
}

impl NewAuction {
    /// 필수 필드가 하나라도 없거나 형식이 틀리면 `None`
    pub fn validate(cmd: CreateAuctionCommand) -> Option<Self> {
        let name = cmd.name.filter(|n| !n.is_empty())?;
        let starting_bid = cmd.starting_bid.filter(|b| b.is_finite())?;
        let end_time = cmd.end_time.as_ref().and_then(EndTimeInput::resolve)?;
        Some(Self {
            name,
            description: cmd.description,
            starting_bid,
            end_time,
        })
    }
}
