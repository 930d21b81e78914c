// region:    --- Imports
use crate::error::StoreError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Category
/// 상품 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sports,
    Recreational,
    Professional,
    Appliances,
}

impl Category {
    /// 선택 목록에 표시되는 순서
    pub const ALL: [Category; 4] = [
        Category::Sports,
        Category::Recreational,
        Category::Professional,
        Category::Appliances,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "SPORTS",
            Category::Recreational => "RECREATIONAL",
            Category::Professional => "PROFESSIONAL",
            Category::Appliances => "APPLIANCES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
// endregion: --- Category

// region:    --- Listing
/// 저장된 경매 상품
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub starting_bid: f64,
    pub highest_bid: f64,
}

/// 등록 전 상품. 최고 입찰가는 시작가와 같다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub name: String,
    pub category: Category,
    pub starting_bid: f64,
}

impl NewListing {
    pub fn highest_bid(&self) -> f64 {
        self.starting_bid
    }
}

/// 테이블 행 (검증 전)
#[derive(Debug, sqlx::FromRow)]
pub struct ListingRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub starting_bid: f64,
    pub highest_bid: f64,
}

impl TryFrom<ListingRow> for Listing {
    type Error = StoreError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid = |reason: String| StoreError::InvalidRow { id, reason };

        let category = row
            .category
            .parse::<Category>()
            .map_err(|e| invalid(e.to_string()))?;
        if !row.starting_bid.is_finite() || row.starting_bid < 0.0 {
            return Err(invalid(format!("starting bid {} is not a valid amount", row.starting_bid)));
        }
        if !row.highest_bid.is_finite() {
            return Err(invalid(format!("highest bid {} is not a valid amount", row.highest_bid)));
        }
        if row.highest_bid < row.starting_bid {
            return Err(invalid(format!(
                "highest bid {} is below starting bid {}",
                row.highest_bid, row.starting_bid
            )));
        }

        Ok(Listing {
            id,
            name: row.name,
            category,
            starting_bid: row.starting_bid,
            highest_bid: row.highest_bid,
        })
    }
}
// endregion: --- Listing

// region:    --- Starting Bid
#[derive(Debug, Error, PartialEq)]
pub enum StartingBidError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("starting bid cannot be negative")]
    Negative,
}

/// 시작가 입력 파싱. 빈 입력은 0으로 처리한다.
pub fn parse_starting_bid(raw: &str) -> Result<f64, StartingBidError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StartingBidError::NotANumber(trimmed.to_string()))?;
    if value < 0.0 {
        return Err(StartingBidError::Negative);
    }
    // -0 은 0 으로
    Ok(value + 0.0)
}
// endregion: --- Starting Bid

// endregion: --- Tests
