/// 입찰 판정
/// 입찰가가 현재 최고 입찰가보다 "엄격하게" 클 때만 수락한다. 같은 금액은 거절.
// region:    --- Imports
use super::model::Listing;
use thiserror::Error;
use tracing::info;

// endregion: --- Imports

// region:    --- Decision
/// 입찰 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub enum BidDecision {
    Accept { listing_id: i64, amount: f64 },
    Reject(BidRejection),
}

/// 입찰 거절 사유
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BidRejection {
    #[error("Your bid is too low. Please try again...")]
    TooLow { offered: f64, highest_bid: f64 },

    #[error("{input:?} is not a valid bid amount. Please try again...")]
    Malformed { input: String },
}

/// 입찰 금액 파싱. 숫자가 아니거나 유한하지 않으면 None
pub fn parse_bid(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 입찰 판정
pub fn resolve_bid(listing: &Listing, raw: &str) -> BidDecision {
    let Some(offered) = parse_bid(raw) else {
        info!("{:<12} --> 잘못된 입찰 금액: {:?}", "Resolver", raw);
        return BidDecision::Reject(BidRejection::Malformed {
            input: raw.trim().to_string(),
        });
    };

    if offered > listing.highest_bid {
        info!(
            "{:<12} --> 입찰 수락 id: {}, {} -> {}",
            "Resolver", listing.id, listing.highest_bid, offered
        );
        BidDecision::Accept {
            listing_id: listing.id,
            amount: offered,
        }
    } else {
        info!(
            "{:<12} --> 입찰 거절 id: {}, 입찰가 {} <= 최고가 {}",
            "Resolver", listing.id, offered, listing.highest_bid
        );
        BidDecision::Reject(BidRejection::TooLow {
            offered,
            highest_bid: listing.highest_bid,
        })
    }
}
// endregion: --- Decision

// endregion: --- Tests
