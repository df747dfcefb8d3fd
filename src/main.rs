//! 폼 유틸리티 명령줄 애플리케이션
//!
//! 환경 설정과 로깅을 초기화한 뒤 명령을 실행합니다.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use form_utils::cli::{self, Cli};
use form_utils::config::{ClientConfig, Environment};
use form_utils::services::notifier::TerminalNotifier;

#[tokio::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("설정 로드 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("🚀 폼 유틸리티 시작 ({:?})", config.environment);

    if cli::run(cli, &config, Arc::new(TerminalNotifier)).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 에러로 남기지 않음
    match profile.as_str() {
        "prod" => {
            dotenv::from_filename(".env.prod").ok();
        }
        "dev" => {
            dotenv::from_filename(".env.dev").ok();
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 레벨을 사용합니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug form_utils list http://intranet/app/Regions
///
/// # 원격 폼 모듈만 debug
/// RUST_LOG=form_utils::services::remote=debug form_utils now
/// ```
fn init_logging() {
    let default_filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}
