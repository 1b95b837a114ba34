//! 모임 등록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장소(MongoDB 또는 인메모리)를 초기화하고 모임 생성과 회원 일괄 등록 API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use meeting_enrollment_backend::config::{
    DatabaseConfig, EnrollmentConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend,
};
use meeting_enrollment_backend::core::state::AppState;
use meeting_enrollment_backend::db::Database;
use meeting_enrollment_backend::repositories::meetings::{
    InMemoryMeetingStore, MeetingStore, MongoMeetingStore,
};
use meeting_enrollment_backend::routes::configure_all_routes;
use meeting_enrollment_backend::services::enrollment::EnrollmentOptions;
use meeting_enrollment_backend::utils::display_terminal::{
    print_startup_summary, print_step_complete, print_step_start, StartupSummary,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 모임 등록 서비스 시작중...");

    let backend = DatabaseConfig::store_backend();
    let options = EnrollmentOptions {
        workers: EnrollmentConfig::workers(),
        batch_timeout: EnrollmentConfig::batch_timeout(),
    };

    print_startup_summary(&startup_summary(backend, options));

    // 저장소 초기화
    print_step_start(1, "저장소 초기화");
    let (store, database) = initialize_store(backend).await?;
    print_step_complete(1, "저장소 초기화");

    let state = web::Data::new(AppState::new(store, backend, options));

    // HTTP 서버 실행
    let result = start_http_server(state).await;

    if let Some(database) = database {
        database.shutdown().await;
    }

    info!("👋 서버 종료");
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(RateLimitConfig::per_second())
        .burst_size(RateLimitConfig::burst_size())
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        RateLimitConfig::per_second(),
        RateLimitConfig::burst_size()
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::http_workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # 일괄 등록 작업자 로그까지 보기
/// RUST_LOG=info,meeting_enrollment_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드에 맞는 저장소를 만듭니다
///
/// MongoDB를 사용하는 경우 연결을 검증하고 유니크 인덱스를 생성하며,
/// 종료 시 닫을 수 있도록 `Database` 핸들도 함께 반환합니다.
async fn initialize_store(
    backend: StoreBackend,
) -> std::io::Result<(Arc<dyn MeetingStore>, Option<Database>)> {
    match backend {
        StoreBackend::Memory => {
            info!("🧠 인메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            let store: Arc<dyn MeetingStore> = Arc::new(InMemoryMeetingStore::new());
            Ok((store, None))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(
                &DatabaseConfig::mongodb_uri(),
                &DatabaseConfig::database_name(),
            )
            .await
            .map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(format!("데이터베이스 연결 실패: {}", e))
            })?;

            let store = MongoMeetingStore::new(&database);
            store.ensure_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(format!("인덱스 생성 실패: {}", e))
            })?;

            let store: Arc<dyn MeetingStore> = Arc::new(store);
            Ok((store, Some(database)))
        }
    }
}

/// 모든 Origin, 메서드, 헤더를 허용하는 CORS 정책
fn configure_cors() -> Cors {
    Cors::permissive().max_age(3600)
}

fn startup_summary(backend: StoreBackend, options: EnrollmentOptions) -> StartupSummary {
    StartupSummary {
        environment: Environment::current().to_string(),
        bind_address: format!("{}:{}", ServerConfig::host(), ServerConfig::port()),
        http_workers: ServerConfig::http_workers(),
        store_backend: backend.to_string(),
        enrollment_workers: options.workers,
        batch_timeout: options
            .batch_timeout
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "disabled".to_string()),
        rate_limit: format!(
            "{}/s (burst {})",
            RateLimitConfig::per_second(),
            RateLimitConfig::burst_size()
        ),
    }
}
