// ==========================================
// 편의점 발주 추천 시스템 - 파일 해석기
// ==========================================
// 지원: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================
// 헤더 위치가 파일마다 다르므로(1행 또는 2행) 이 단계에서는
// 헤더를 해석하지 않는다. 셀 그리드 그대로 RawTable 로 넘기고
// 헤더 판정은 컬럼 해석기(column_resolver)가 맡는다.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

// ==========================================
// RawTable - 미해석 셀 그리드
// ==========================================
// 파일에서 읽은 순서 그대로의 행 목록. 내용에 대한 불변식 없음.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// CSV Parser 구현
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let bytes = fs::read(file_path)?;
        let text = decode_csv_bytes(&bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(RawTable { rows })
    }
}

/// CSV 바이트 디코딩: UTF-8 우선, 실패 시 CP949 재시도.
/// 국내 POS 단말 반출물은 상당수가 CP949 인코딩이다.
fn decode_csv_bytes(bytes: &[u8]) -> String {
    // UTF-8 BOM 제거
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("UTF-8 디코딩 실패, CP949 로 재시도");
            let (decoded, _, _) = encoding_rs::EUC_KR.decode(bytes);
            decoded.into_owned()
        }
    }
}

// ==========================================
// Excel Parser 구현
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        // 첫 번째 시트만 읽는다
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("워크시트가 없음".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(RawTable { rows })
    }
}

// ==========================================
// 통합 파일 해석기 (확장자로 자동 선택)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
