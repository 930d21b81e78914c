// region:    --- Imports
use anyhow::Context;
use great_bay::config::Settings;
use great_bay::database::DatabaseManager;
use great_bay::error::AppError;
use great_bay::repository::PostgresListingRepository;
use great_bay::session::{Session, TerminalConsole};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // logging 초기화 (프롬프트와 섞이지 않도록 stderr)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let settings = Settings::load("great_bay").context("failed to load settings")?;
    let options = settings.connect_options()?;

    // 데이터베이스 연결
    let db_manager = match DatabaseManager::connect(options, &settings.table).await {
        Ok(db_manager) => db_manager,
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Main", e);
            return Err(e).context("failed to connect to the database");
        }
    };

    // 세션 실행 후 성공/실패와 관계없이 연결 종료
    let result = run(&db_manager).await;
    db_manager.close().await;

    if let Err(e) = &result {
        error!("{:<12} --> 세션 비정상 종료: {:?}", "Main", e);
    }
    result.context("auction session aborted")
}

async fn run(db_manager: &DatabaseManager) -> Result<(), AppError> {
    db_manager.initialize_schema().await?;

    let connection_id = db_manager.connection_id().await?;
    println!();
    println!("Connected as id {connection_id}");
    println!();
    info!("{:<12} --> 테이블: {}", "Main", db_manager.table());

    let repository = PostgresListingRepository::new(db_manager.get_pool(), db_manager.table());
    let mut session = Session::new(&repository, TerminalConsole);
    session.run().await?;
    Ok(())
}
// endregion: --- Main
