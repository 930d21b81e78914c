/// 기존 테이블의 숫자 컬럼이 NUMERIC / INTEGER 일 수 있으므로 조회 시 float8, int8 로 맞춘다.
/// 테이블 이름은 설정에서 오므로 쿼리 문자열은 실행 시점에 만든다.
/// 값은 항상 바인딩 파라미터로 넘긴다.
#[derive(Debug, Clone)]
pub struct ListingQueries {
    /// 상품 등록
    pub insert: String,
    /// 모든 상품 조회
    pub select_all: String,
    /// 최고 입찰가 갱신
    pub update_highest_bid: String,
}

impl ListingQueries {
    pub fn for_table(table: &str) -> Self {
        Self {
            insert: format!(
                "INSERT INTO {table} (name, category, starting_bid, highest_bid) VALUES ($1, $2, $3, $4)"
            ),
            select_all: format!(
                "SELECT id::int8 AS id, name, category, \
                 starting_bid::float8 AS starting_bid, highest_bid::float8 AS highest_bid \
                 FROM {table} ORDER BY id"
            ),
            update_highest_bid: format!("UPDATE {table} SET highest_bid = $1 WHERE id = $2"),
        }
    }
}
