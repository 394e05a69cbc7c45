// ==========================================
// 편의점 발주 추천 시스템 - CLI 주 진입점
// ==========================================
// 흐름: 설정 로드 → 파일 수집 → 컨텍스트 해석 → 추천 → 검토 출력 → 발주서
// stdout: 검토 테이블 / stderr: tracing 로그
// ==========================================

use anyhow::Context as _;
use chrono::{Duration, Local};
use clap::Parser;
use std::path::PathBuf;

use cvs_restock_advisor::config::Settings;
use cvs_restock_advisor::domain::types::{DemandContext, StoreType};
use cvs_restock_advisor::engine::{OrderParams, RecommendationTable};
use cvs_restock_advisor::weather::{
    resolve_context, OpenMeteoForecast, OpenMeteoGeocoder,
};
use cvs_restock_advisor::{export, importer, logging};

#[derive(Parser, Debug)]
#[command(
    name = "cvs-restock-advisor",
    version,
    about = "편의점 발주 추천 시스템 - POS 반출 파일로 발주량을 제안"
)]
struct Cli {
    /// POS 반출 파일 (.csv / .xlsx / .xls)
    input: PathBuf,

    /// 설정 파일 경로 (기본: <config_dir>/cvs-restock-advisor/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 상권 유형 (office / residential / campus / tourist)
    #[arg(long)]
    store_type: Option<StoreType>,

    /// 날씨 조회용 지역명 (예: 서울, 부산)
    #[arg(long)]
    region: Option<String>,

    /// 판매 이력 조회 기간 (일)
    #[arg(long)]
    lookback_days: Option<u32>,

    /// 목표 재고 일수
    #[arg(long)]
    target_stock_days: Option<f64>,

    /// 발주 대상일 오프셋 (1=내일, 2=모레)
    #[arg(long)]
    day_offset: Option<u8>,

    /// 외부 조회 생략 (기본 날씨 컨텍스트 사용)
    #[arg(long)]
    offline: bool,

    /// 발주서 출력 경로 (기본: 발주서_<대상일>.csv)
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", cvs_restock_advisor::APP_NAME);
    tracing::info!("시스템 버전: {}", cvs_restock_advisor::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();

    // 설정 로드 + CLI 인자 덮어쓰기 (덮어쓴 뒤 재검증)
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(store_type) = cli.store_type {
        settings.store_type = store_type;
    }
    if let Some(region) = cli.region {
        settings.region = Some(region);
    }
    if let Some(days) = cli.lookback_days {
        settings.lookback_days = days;
    }
    if let Some(days) = cli.target_stock_days {
        settings.target_stock_days = days;
    }
    if let Some(offset) = cli.day_offset {
        settings.target_day_offset = offset;
    }
    settings.validate()?;

    let target_date = Local::now().date_naive() + Duration::days(i64::from(settings.target_day_offset));
    tracing::info!(
        store_type = %settings.store_type,
        lookback_days = settings.lookback_days,
        target_stock_days = settings.target_stock_days,
        %target_date,
        "실행 파라미터"
    );

    // 1. 수집: 파일 → 정규화 상품 레코드 (판매량 컬럼 부재는 여기서 치명)
    let resolved = importer::ingest_file(&cli.input)
        .with_context(|| format!("수집 실패: {}", cli.input.display()))?;
    tracing::debug!(
        "수집 요약: {}",
        serde_json::to_string(&resolved.report).unwrap_or_default()
    );

    // 2. 컨텍스트 해석 (실패는 기본 컨텍스트로 열화, 치명 아님)
    let ctx = if cli.offline {
        tracing::info!("오프라인 모드, 기본 날씨 컨텍스트 사용");
        DemandContext::fallback(settings.store_type)
    } else {
        let client = reqwest::Client::new();
        let geocoder = OpenMeteoGeocoder::new(client.clone());
        let forecast = OpenMeteoForecast::new(client);
        resolve_context(
            &geocoder,
            &forecast,
            settings.store_type,
            settings.region.as_deref(),
            settings.target_day_offset,
        )
        .await
    };

    // 3. 추천 테이블 구성
    let params = OrderParams {
        lookback_days: settings.lookback_days,
        target_stock_days: settings.target_stock_days,
    };
    let table = RecommendationTable::build(resolved.records, &ctx, &params, &settings.weights);

    // 4. 검토 테이블 출력 (추천량 양수, 내림차순)
    let visible = table.visible();
    println!();
    println!("발주 추천 ({} 대상, {} 기준)", target_date, ctx.store_type);
    println!("{:-<60}", "");
    println!("{:>4}  {:<20} {:>8} {:>8}", "순위", "상품명", "현재재고", "추천수량");
    for (rank, row) in visible.iter().enumerate() {
        println!(
            "{:>4}  {:<20} {:>8} {:>8}",
            rank + 1,
            row.product.name,
            row.product.current_stock,
            row.recommended_qty
        );
    }
    println!("{:-<60}", "");
    println!(
        "총 {}건 추천 (전체 {}행, 제거 {}행, 배치 {})",
        visible.len(),
        resolved.report.total_rows,
        resolved.report.dropped_rows,
        resolved.report.batch_id
    );

    // 5. 발주서 내보내기 (확정 수량 양수 행만)
    let out_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("발주서_{}.csv", target_date.format("%Y%m%d"))));
    export::write_order_csv(&out_path, &table.export_rows())?;
    println!("발주서 저장: {}", out_path.display());

    Ok(())
}
