// region:    --- Imports
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors
/// 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 저장소 경계에서 검증에 실패한 행
    #[error("invalid listing row (id {id}): {reason}")]
    InvalidRow { id: i64, reason: String },
}

/// 설정 오류
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("invalid table name {0:?}: expected letters, digits and underscores")]
    InvalidTableName(String),
}

/// 세션 실행 중 발생하는 치명적 오류
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

// endregion: --- Errors
