// ==========================================
// 로그 시스템 초기화
// ==========================================
// tracing + tracing-subscriber 사용
// 환경 변수로 로그 레벨 설정 가능
// 로그는 stderr 로 — stdout 은 검토 테이블 출력 전용
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템 초기화
///
/// # 환경 변수
/// - RUST_LOG: 로그 레벨 필터 (기본: info)
///   예: RUST_LOG=debug 또는 RUST_LOG=cvs_restock_advisor=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 테스트 환경용 로그 초기화 (디버그 레벨, 중복 호출 허용)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
