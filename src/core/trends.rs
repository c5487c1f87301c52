use crate::core::MarketTrendPoint;
use crate::utils::error::{PlannerError, Result};
use rand::Rng;

pub const TREND_MONTHS: usize = 12;

const MARKET_SIZE_MIN: u32 = 500;
const MARKET_SIZE_SPAN: u32 = 1000;
const COMPETITORS_MIN: u32 = 5;
const COMPETITORS_SPAN: u32 = 20;

/// Mock market series for the chart. The numbers carry no meaning.
pub fn generate_trends<R: Rng + ?Sized>(rng: &mut R) -> Vec<MarketTrendPoint> {
    (1..=TREND_MONTHS)
        .map(|month| MarketTrendPoint {
            month: format!("Month {}", month),
            market_size: MARKET_SIZE_MIN + rng.gen_range(0..MARKET_SIZE_SPAN),
            competitors: COMPETITORS_MIN + rng.gen_range(0..COMPETITORS_SPAN),
        })
        .collect()
}

/// 使用執行緒 RNG，不設種子
pub fn mock_trends() -> Vec<MarketTrendPoint> {
    generate_trends(&mut rand::thread_rng())
}

pub fn trends_to_csv(points: &[MarketTrendPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for point in points {
        writer.serialize(point)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| PlannerError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
