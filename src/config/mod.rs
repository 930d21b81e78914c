/// 저장소 연결 설정
/// 우선순위: 기본값 < 설정 파일(선택) < GREAT_BAY_ 환경 변수 < DATABASE_URL
// region:    --- Imports
use crate::error::SettingsError;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

// endregion: --- Imports

// region:    --- Settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    pub database: String,
    pub table: String,
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Settings {
    /// 설정 로드
    pub fn load(path: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = ::config::Config::builder()
            .set_default("host", "localhost")?
            .set_default("port", 5432_i64)?
            .set_default("user", "postgres")?
            .set_default("database", "great_bay")?
            .set_default("table", "auctions")?
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("GREAT_BAY"))
            .build()?
            .try_deserialize()?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            settings.database_url = Some(url);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// 연결 URL 기반 설정 (테스트 및 스크립트용)
    pub fn from_url(url: &str, table: &str) -> Result<Self, SettingsError> {
        let settings = Self {
            host: String::new(),
            port: 0,
            user: String::new(),
            password: None,
            database: String::new(),
            table: table.to_string(),
            database_url: Some(url.to_string()),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// 테이블 이름은 쿼리 문자열에 직접 들어가므로 식별자 형식만 허용
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !is_plain_identifier(&self.table) {
            return Err(SettingsError::InvalidTableName(self.table.clone()));
        }
        self.connect_options()?;
        Ok(())
    }

    /// 연결 옵션 생성
    pub fn connect_options(&self) -> Result<PgConnectOptions, SettingsError> {
        match &self.database_url {
            Some(url) => PgConnectOptions::from_str(url).map_err(SettingsError::InvalidUrl),
            None => {
                let options = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .username(&self.user)
                    .database(&self.database);
                // 비밀번호가 없으면 PGPASSWORD / .pgpass 를 그대로 쓴다
                Ok(match self.configured_password() {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }

    /// 설정된 비밀번호 (빈 문자열은 미설정으로 본다)
    pub fn configured_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

// Postgres 식별자 최대 길이는 63바이트
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// endregion: --- Settings

// endregion: --- Tests
