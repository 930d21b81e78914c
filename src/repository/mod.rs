/// 경매 상품 저장소
/// 1. 등록
/// 2. 전체 조회
/// 3. 최고 입찰가 갱신
// region:    --- Imports
use crate::bidding::model::{Listing, ListingRow, NewListing};
use crate::error::StoreError;
use async_trait::async_trait;
use queries::ListingQueries;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

pub mod queries;

// endregion: --- Imports

// region:    --- Repository Trait
/// 상품 저장소 트레이트
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// 상품 한 건 등록, 영향받은 행 수 반환
    async fn create(&self, listing: &NewListing) -> Result<u64, StoreError>;

    /// 모든 상품 조회 (id 순)
    async fn read_all(&self) -> Result<Vec<Listing>, StoreError>;

    /// id 가 일치하는 상품의 최고 입찰가 갱신, 영향받은 행 수 반환
    async fn update_highest_bid(&self, id: i64, highest_bid: f64) -> Result<u64, StoreError>;
}
// endregion: --- Repository Trait

// region:    --- Postgres Repository
/// 상품 저장소 구현체
pub struct PostgresListingRepository {
    pool: Arc<PgPool>,
    queries: ListingQueries,
}

impl PostgresListingRepository {
    pub fn new(pool: Arc<PgPool>, table: &str) -> Self {
        Self {
            pool,
            queries: ListingQueries::for_table(table),
        }
    }
}

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn create(&self, listing: &NewListing) -> Result<u64, StoreError> {
        info!("{:<12} --> 상품 등록: {:?}", "Repository", listing);
        let result = sqlx::query(&self.queries.insert)
            .bind(&listing.name)
            .bind(listing.category.as_str())
            .bind(listing.starting_bid)
            .bind(listing.highest_bid())
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn read_all(&self) -> Result<Vec<Listing>, StoreError> {
        info!("{:<12} --> 모든 상품 조회", "Repository");
        let rows = sqlx::query_as::<_, ListingRow>(&self.queries.select_all)
            .fetch_all(&*self.pool)
            .await?;
        rows.into_iter().map(Listing::try_from).collect()
    }

    async fn update_highest_bid(&self, id: i64, highest_bid: f64) -> Result<u64, StoreError> {
        info!(
            "{:<12} --> 최고 입찰가 갱신 id: {}, 금액: {}",
            "Repository", id, highest_bid
        );
        let result = sqlx::query(&self.queries.update_highest_bid)
            .bind(highest_bid)
            .bind(id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
// endregion: --- Postgres Repository
