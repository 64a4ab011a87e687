/// 전체 경매 조회 (생성 순)
pub const GET_ALL_AUCTIONS: &str = "SELECT id, name, description, starting_bid, current_bid, highest_bidder, end_time, is_closed FROM auctions ORDER BY id ASC";

/// 경매 조회
pub const GET_AUCTION: &str = "SELECT id, name, description, starting_bid, current_bid, highest_bidder, end_time, is_closed FROM auctions WHERE id = $1";

/// 이메일로 사용자 조회
pub const GET_USER_BY_EMAIL: &str =
    "SELECT id, username, email, password FROM users WHERE email = $1";
