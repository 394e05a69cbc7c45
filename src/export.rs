// ==========================================
// 편의점 발주 추천 시스템 - 발주서 내보내기
// ==========================================
// 형식: UTF-8 + BOM CSV (스프레드시트 호환용 BOM)
// ==========================================

use crate::domain::product::RecommendationRecord;
use crate::importer::error::ImportResult;
use std::fs;
use std::path::Path;

/// UTF-8 BOM 바이트
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 확정 발주 행들을 CSV 파일로 쓴다.
/// 행 선별(양수 확정 수량)은 호출자(RecommendationTable) 책임.
pub fn write_order_csv(path: &Path, rows: &[&RecommendationRecord]) -> ImportResult<()> {
    let bytes = render_order_csv(rows)?;
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "발주서 내보내기 완료");
    Ok(())
}

/// CSV 바이트 생성 (파일 쓰기와 분리해 테스트 가능하게)
pub fn render_order_csv(rows: &[&RecommendationRecord]) -> ImportResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::with_capacity(rows.len() * 64 + UTF8_BOM.len());
    buf.extend_from_slice(UTF8_BOM);

    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(["상품명", "카테고리", "주간판매량", "현재재고", "행사", "발주수량"])?;

        for row in rows {
            let period_sales = format!("{}", row.product.period_sales);
            let current_stock = format!("{}", row.product.current_stock);
            let confirmed_qty = row.confirmed_qty.to_string();
            writer.write_record([
                row.product.name.as_str(),
                row.product.category.as_str(),
                period_sales.as_str(),
                current_stock.as_str(),
                row.product.promotion.as_str(),
                confirmed_qty.as_str(),
            ])?;
        }
        writer.flush()?;
    }

    Ok(buf)
}
