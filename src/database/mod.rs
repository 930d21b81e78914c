use crate::error::StoreError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::sync::Arc;
use tracing::info;

/// 대화형 세션 하나가 연결 하나를 프로세스 수명 동안 사용한다.
pub struct DatabaseManager {
    pool: Arc<PgPool>,
    table: String,
}

impl DatabaseManager {
    /// 데이터베이스 연결
    pub async fn connect(options: PgConnectOptions, table: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        info!("{:<12} --> 데이터베이스 연결 성공", "Database");
        Ok(Self {
            pool: Arc::new(pool),
            table: table.to_string(),
        })
    }

    /// 데이터베이스 풀 가져오기
    pub fn get_pool(&self) -> Arc<PgPool> {
        Arc::clone(&self.pool)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// 스키마 초기화 (테이블이 없을 때만 생성)
    /// CREATE 권한이 없는 역할도 기존 테이블로 시작할 수 있도록 존재 여부를 먼저 확인한다.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        if self.table_exists().await? {
            info!("{:<12} --> 기존 테이블 사용: {}", "Database", self.table);
            return Ok(());
        }
        let create_schema_sql =
            include_str!("../../sql/01-create-schema.sql").replace("{table}", &self.table);
        self.execute_multi_query(&create_schema_sql).await?;
        info!("{:<12} --> 스키마 초기화 완료: {}", "Database", self.table);
        Ok(())
    }

    /// 테이블 존재 여부 (search_path 기준)
    pub async fn table_exists(&self) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT to_regclass($1) IS NOT NULL")
            .bind(&self.table)
            .fetch_one(&*self.pool)
            .await?;
        Ok(exists)
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), StoreError> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }

    /// 서버 측 연결 id
    pub async fn connection_id(&self) -> Result<i32, StoreError> {
        let pid = sqlx::query_scalar::<_, i32>("SELECT pg_backend_pid()")
            .fetch_one(&*self.pool)
            .await?;
        Ok(pid)
    }

    /// 연결 종료
    pub async fn close(&self) {
        self.pool.close().await;
        info!("{:<12} --> 데이터베이스 연결 종료", "Database");
    }
}
