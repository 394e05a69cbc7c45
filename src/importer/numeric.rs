// ==========================================
// 편의점 발주 추천 시스템 - 숫자 강제 변환
// ==========================================
// 근거: POS 반출 필드 대응표 v0.1 - 수치 셀 품질 규칙
// ==========================================
// 정책: 더러운 소매 반출 데이터가 파이프라인을 멈추게 해서는 안 된다.
// 변환 실패는 예외가 아니라 0이다. 0 이외의 센티널은 쓰지 않는다.
// ==========================================

/// 임의 셀 내용을 최선으로 f64 변환한다.
///
/// - 앞뒤 공백 제거, 천 단위 콤마 제거 후 파싱
/// - 빈 문자열 / "-" / 비수치 텍스트 → 0.0
/// - 음수는 0으로 절삭 (판매량·재고는 음수가 될 수 없음)
pub fn coerce_number(cell: &str) -> f64 {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_number("14"), 14.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number("  7 "), 7.0);
    }

    #[test]
    fn test_coerce_thousands_separator() {
        assert_eq!(coerce_number("1,234"), 1234.0);
        assert_eq!(coerce_number("12,345,678"), 12345678.0);
    }

    #[test]
    fn test_coerce_dirty_cells_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number("품절"), 0.0);
    }

    #[test]
    fn test_coerce_negative_clamped() {
        assert_eq!(coerce_number("-3"), 0.0);
    }
}
