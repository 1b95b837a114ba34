//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, HTTP 서버, 데이터 저장소 관련 설정을 환경 변수에서 읽어옵니다.
//! 모든 값은 기본값을 가지므로 `.env` 파일 없이도 서버가 기동됩니다.

use std::env;
use std::fmt;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트 번호 (`PORT`, 기본값 5000)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    /// 바인딩 주소 (`HOST`, 기본값 `0.0.0.0`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix-web 워커 스레드 수 (`HTTP_WORKERS`, 기본값 4)
    pub fn http_workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }

    /// JSON 요청 본문 최대 크기 (`MAX_PAYLOAD_BYTES`, 기본값 4 MiB)
    ///
    /// 일괄 등록 요청은 회원 수에 비례해 커지므로 actix-web 기본값(32 KiB)보다 넉넉하게 잡습니다.
    pub fn max_payload_bytes() -> usize {
        env::var("MAX_PAYLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4 * 1024 * 1024)
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB (기본값)
    Mongo,
    /// 프로세스 메모리. 재시작하면 데이터가 사라집니다.
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Mongo => f.write_str("mongo"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`)
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (`MONGODB_DBNAME`)
    pub fn database_name() -> String {
        env::var("MONGODB_DBNAME").unwrap_or_else(|_| "meetings_dev".to_string())
    }

    /// 저장소 백엔드 (`STORE_BACKEND`, `mongo` | `memory`)
    pub fn store_backend() -> StoreBackend {
        env::var("STORE_BACKEND")
            .map(|v| StoreBackend::from_str(&v))
            .unwrap_or(StoreBackend::Mongo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str(" Memory "), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_str("postgres"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("MAX_PAYLOAD_BYTES").is_err() {
            assert_eq!(ServerConfig::max_payload_bytes(), 4 * 1024 * 1024);
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_DBNAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "meetings_dev");
        }
    }
}
