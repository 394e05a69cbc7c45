// ==========================================
// 편의점 발주 추천 시스템 - 수집 모듈 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================
// 셀 단위 문제(숫자 변환 실패 등)는 이 열거형에 들어오지 않는다.
// 행 내부에서 0으로 흡수되며, 치명 에러는 파일/컬럼 수준뿐이다.
// ==========================================

use thiserror::Error;

/// 수집 모듈 에러 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 에러 =====
    #[error("파일이 존재하지 않음: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (.xlsx/.xls/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 해석 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 해석 실패: {0}")]
    CsvParseError(String),

    // ===== 컬럼 해석 에러 =====
    // 2행 헤더 폴백까지 시도한 뒤에도 판매량 계열 컬럼이 없으면 치명.
    // 추천 테이블은 일절 생성하지 않는다.
    #[error("필수 컬럼 누락: '{0}' 계열 컬럼을 찾을 수 없음 (1·2행 헤더 모두 시도)")]
    MissingSalesColumn(String),

    #[error("유효한 상품 행이 없음: {0}")]
    EmptyTable(String),

    // ===== 설정 에러 =====
    #[error("설정값 오류 (key: {key}): {message}")]
    ConfigValueError { key: String, message: String },

    // ===== 통용 에러 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
