// ==========================================
// 편의점 발주 추천 시스템 - 컬럼 해석기
// ==========================================
// 근거: POS 반출 필드 대응표 v0.1 - 표준 5필드 매핑
// 책임: 형태가 불규칙한 RawTable → 정규화 상품 레코드 변환
// ==========================================
// 소스 반출물의 실제 변형들:
//   - 헤더가 1행일 수도, 2행일 수도 있음 (상단에 리포트 제목 행)
//   - 컬럼 라벨에 공백/줄바꿈이 끼어 있음 ("현재 재고", "주간\n판매량")
//   - 동일 계열 컬럼 중복 ("1주판매량", "2주판매량" …) — 최신 기간이
//     항상 왼쪽이라는 리포트 관례에 따라 첫 번째 일치 컬럼을 쓴다
// ==========================================

use crate::domain::product::{IngestReport, ProductRecord, UNCATEGORIZED};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;
use crate::importer::numeric::coerce_number;

// ==========================================
// 별칭 테이블 (Alias Table)
// ==========================================
// 표준 필드별 부분 문자열 술어 목록. 새 반출 변형 대응은
// 코드 수정이 아니라 이 테이블에 항목을 추가하는 것으로 끝낸다.
// 각 목록 내 순서 = 우선순위.
#[derive(Debug, Clone)]
pub struct AliasTable {
    pub name: Vec<String>,      // 상품명 계열
    pub category: Vec<String>,  // 카테고리 계열 (헤더 판별 기준 컬럼)
    pub sales: Vec<String>,     // 판매량 계열 (필수)
    pub stock: Vec<String>,     // 재고 계열
    pub promotion: Vec<String>, // 행사 계열
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            name: vec!["상품명".into(), "상품".into()],
            category: vec!["카테고리".into(), "등급".into()],
            sales: vec!["판매량".into(), "판매수량".into()],
            stock: vec!["재고".into()],
            promotion: vec!["행사".into(), "프로모션".into()],
        }
    }
}

/// 판매량 계열의 대표 라벨. 치명 에러 메시지에 쓰인다.
const SALES_FAMILY_LABEL: &str = "판매량";

/// 소계/푸터 행이 상품명 자리에 남기는 빈칸 표식
const BLANK_MARKERS: &[&str] = &["-", "—"];

// ==========================================
// 해석 결과
// ==========================================
#[derive(Debug)]
pub struct ResolvedTable {
    pub records: Vec<ProductRecord>,
    pub report: IngestReport,
}

// ==========================================
// ColumnResolver - 컬럼 해석기
// ==========================================
pub struct ColumnResolver {
    aliases: AliasTable,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

impl ColumnResolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// RawTable 을 정규화 상품 레코드 집합으로 변환한다.
    ///
    /// 헤더 판정: 1행을 헤더로 가정하되, 카테고리 계열 컬럼이 보이지
    /// 않으면 2행을 헤더로 한 단계만 폴백한다 (추가 탐색 없음).
    /// 판매량 계열 컬럼이 끝내 없으면 치명 에러 — 추측하지 않는다.
    pub fn resolve(&self, table: &RawTable) -> ImportResult<ResolvedTable> {
        if table.is_empty() {
            return Err(ImportError::EmptyTable("입력 파일에 행이 없음".to_string()));
        }

        let header_row = self.detect_header_row(table);
        let headers: Vec<String> = table.rows[header_row]
            .iter()
            .map(|label| normalize_label(label))
            .collect();

        let sales_col = find_column(&headers, &self.aliases.sales)
            .ok_or_else(|| ImportError::MissingSalesColumn(SALES_FAMILY_LABEL.to_string()))?;

        // 선택 컬럼: 없으면 문서화된 기본값으로 열화
        let name_col = find_column(&headers, &self.aliases.name);
        let category_col = find_column(&headers, &self.aliases.category);
        let stock_col = find_column(&headers, &self.aliases.stock);
        let promotion_col = find_column(&headers, &self.aliases.promotion);

        let data_rows = &table.rows[header_row + 1..];
        let mut records = Vec::with_capacity(data_rows.len());
        let mut dropped = 0usize;

        for row in data_rows {
            let name = cell_at(row, name_col).trim().to_string();

            // 상품명 없는 행은 소계/푸터 — 에러가 아니라 필터링
            if name.is_empty() || BLANK_MARKERS.contains(&name.as_str()) {
                dropped += 1;
                continue;
            }

            let category = {
                let raw = cell_at(row, category_col).trim().to_string();
                if raw.is_empty() {
                    UNCATEGORIZED.to_string()
                } else {
                    raw
                }
            };

            records.push(ProductRecord {
                name,
                category,
                period_sales: coerce_number(cell_at(row, Some(sales_col))),
                current_stock: coerce_number(cell_at(row, stock_col)),
                promotion: cell_at(row, promotion_col).trim().to_string(),
            });
        }

        if records.is_empty() {
            return Err(ImportError::EmptyTable(
                "상품명이 있는 데이터 행이 없음".to_string(),
            ));
        }

        let report = IngestReport::new(header_row, data_rows.len(), dropped);
        tracing::info!(
            batch_id = %report.batch_id,
            header_row = report.header_row,
            total_rows = report.total_rows,
            dropped_rows = report.dropped_rows,
            "컬럼 해석 완료"
        );

        Ok(ResolvedTable { records, report })
    }

    /// 카테고리 계열 컬럼을 기준으로 헤더 행을 판정한다.
    /// 1행에 없고 2행에 있으면 2행 채택. 둘 다 없으면 1행 유지
    /// (카테고리 자체가 없는 반출물도 있으므로 판매량 검사는 별도).
    fn detect_header_row(&self, table: &RawTable) -> usize {
        let row_has_category = |row: &[String]| {
            row.iter()
                .any(|label| matches_any(&normalize_label(label), &self.aliases.category))
        };

        if row_has_category(&table.rows[0]) {
            return 0;
        }
        if table.rows.len() > 1 && row_has_category(&table.rows[1]) {
            tracing::debug!("1행에 카테고리 계열 컬럼 없음, 2행을 헤더로 채택");
            return 1;
        }
        0
    }
}

/// 라벨 정규화: 공백·줄바꿈 전부 제거.
/// 소스 반출물이 간헐적으로 라벨에 패딩을 넣는다.
fn normalize_label(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 별칭 목록과 부분 문자열 일치하는 첫 번째 컬럼 인덱스.
/// 중복 컬럼 정책이 구현되는 유일한 지점: 왼쪽 우선.
fn find_column(headers: &[String], aliases: &[String]) -> Option<usize> {
    headers
        .iter()
        .position(|label| matches_any(label, aliases))
}

fn matches_any(label: &str, aliases: &[String]) -> bool {
    aliases.iter().any(|alias| label.contains(alias.as_str()))
}

/// 인덱스 범위를 벗어나거나 컬럼이 없으면 빈 셀로 취급
/// (flexible CSV 는 행 길이가 제각각일 수 있다)
fn cell_at(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}
