// ==========================================
// 편의점 발주 추천 시스템 - 수집 계층
// ==========================================
// 책임: 외부 POS 반출 파일 → 정규화 상품 레코드
// 지원: Excel, CSV
// ==========================================

pub mod column_resolver;
pub mod error;
pub mod file_parser;
pub mod numeric;

pub use column_resolver::{AliasTable, ColumnResolver, ResolvedTable};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, RawTable, UniversalFileParser};
pub use numeric::coerce_number;

use std::path::Path;

/// 파일 경로 → 정규화 상품 레코드 원스톱 수집.
/// 파서 선택(확장자)과 컬럼 해석을 묶은 편의 함수.
pub fn ingest_file<P: AsRef<Path>>(path: P) -> ImportResult<ResolvedTable> {
    let table = UniversalFileParser.parse(path)?;
    ColumnResolver::default().resolve(&table)
}
