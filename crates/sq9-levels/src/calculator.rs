//! Level calculation with input checks and shared grids.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::breach::{check_breaches, BreachReport};
use crate::cache::GridCache;
use crate::config::LevelConfig;
use crate::error::{Error, Result};
use crate::sources::{PriceSource, ReferenceAngleSource};
use crate::LevelResult;

/// Levels computed for one symbol, with the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerLevels {
    pub symbol: String,
    pub price: f64,
    pub reference_angle: f64,
    #[serde(flatten)]
    pub levels: LevelResult,
}

/// Computes levels for validated inputs against cached grids.
#[derive(Debug, Default)]
pub struct LevelCalculator {
    config: LevelConfig,
    cache: Arc<GridCache>,
}

impl LevelCalculator {
    /// Calculator with its own grid cache.
    pub fn new(config: LevelConfig) -> Result<Self> {
        Self::with_cache(config, Arc::new(GridCache::new()))
    }

    /// Calculator sharing an existing grid cache.
    pub fn with_cache(config: LevelConfig, cache: Arc<GridCache>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<GridCache> {
        &self.cache
    }

    /// Levels around `price` for `reference_angle`.
    ///
    /// Only non-finite inputs are errors. Everything past the input check
    /// degrades to missing levels instead of failing.
    pub fn compute(&self, price: f64, reference_angle: f64) -> Result<LevelResult> {
        check_inputs(price, reference_angle)?;
        let grid = self.cache.get(self.config.grid_size)?;
        Ok(self.config.extractor().extract(&grid, price, reference_angle))
    }

    /// Fetch the price and reference angle for `symbol` and compute its levels.
    pub fn calculate_for_ticker<P, A>(&self, symbol: &str, prices: &P, angles: &A) -> Result<TickerLevels>
    where
        P: PriceSource + ?Sized,
        A: ReferenceAngleSource + ?Sized,
    {
        let price = prices
            .current_price(symbol)
            .filter(|p| p.is_finite())
            .ok_or_else(|| Error::PriceUnavailable(symbol.to_string()))?;
        let reference_angle = angles
            .reference_angle()
            .filter(|a| a.is_finite())
            .ok_or(Error::AngleUnavailable)?;

        let levels = self.compute(price, reference_angle)?;
        tracing::info!(symbol, price, reference_angle, "calculated levels");

        Ok(TickerLevels {
            symbol: symbol.to_string(),
            price,
            reference_angle,
            levels,
        })
    }

    /// Levels for several symbols. A failure for one symbol does not stop the others.
    pub fn calculate_for_tickers<S, P, A>(
        &self,
        symbols: &[S],
        prices: &P,
        angles: &A,
    ) -> BTreeMap<String, Result<TickerLevels>>
    where
        S: AsRef<str>,
        P: PriceSource + ?Sized,
        A: ReferenceAngleSource + ?Sized,
    {
        symbols
            .iter()
            .map(|symbol| {
                let symbol = symbol.as_ref();
                let result = self.calculate_for_ticker(symbol, prices, angles);
                if let Err(e) = &result {
                    tracing::warn!(symbol, error = %e, "level calculation failed");
                }
                (symbol.to_string(), result)
            })
            .collect()
    }

    /// Compare the current price of a stored calculation against its levels.
    pub fn check_ticker<P>(&self, stored: &TickerLevels, prices: &P) -> Result<BreachReport>
    where
        P: PriceSource + ?Sized,
    {
        let current = prices
            .current_price(&stored.symbol)
            .filter(|p| p.is_finite())
            .ok_or_else(|| Error::PriceUnavailable(stored.symbol.clone()))?;

        let report = check_breaches(&stored.levels, stored.price, current);
        if report.needs_recalculation() {
            tracing::info!(
                symbol = %stored.symbol,
                previous = stored.price,
                current,
                breaches = report.breached_levels.len(),
                "price breached levels"
            );
        }
        Ok(report)
    }
}

/// One-shot level computation on a fresh grid.
///
/// Prefer a long-lived [`LevelCalculator`] for repeated calls so the grid
/// is built only once.
pub fn compute_levels(price: f64, reference_angle: f64, grid_size: usize, level_count: usize) -> Result<LevelResult> {
    let config = LevelConfig {
        grid_size,
        level_count,
        ..LevelConfig::default()
    };
    LevelCalculator::new(config)?.compute(price, reference_angle)
}

fn check_inputs(price: f64, reference_angle: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(Error::NonFinitePrice(price));
    }
    if !reference_angle.is_finite() {
        return Err(Error::NonFiniteAngle(reference_angle));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FixedAngle;

    fn calculator() -> LevelCalculator {
        LevelCalculator::new(LevelConfig::default()).unwrap()
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let calc = calculator();
        assert!(matches!(calc.compute(f64::NAN, 0.0), Err(Error::NonFinitePrice(_))));
        assert!(matches!(calc.compute(f64::INFINITY, 0.0), Err(Error::NonFinitePrice(_))));
        assert!(matches!(calc.compute(100.0, f64::NAN), Err(Error::NonFiniteAngle(_))));
        assert!(matches!(
            calc.compute(100.0, f64::NEG_INFINITY),
            Err(Error::NonFiniteAngle(_))
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = LevelConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(matches!(LevelCalculator::new(config), Err(Error::GridTooSmall { .. })));
    }

    #[test]
    fn reuses_cached_grid() {
        let calc = calculator();
        calc.compute(100.0, 0.0).unwrap();
        calc.compute(250.0, 90.0).unwrap();
        assert_eq!(calc.cache().len(), 1);
        assert!(calc.cache().contains(150));
    }

    #[test]
    fn shared_cache_between_calculators() {
        let cache = Arc::new(GridCache::new());
        let five = LevelCalculator::with_cache(LevelConfig::default(), Arc::clone(&cache)).unwrap();
        let three = LevelCalculator::with_cache(
            LevelConfig {
                level_count: 3,
                ..Default::default()
            },
            Arc::clone(&cache),
        )
        .unwrap();

        assert_eq!(five.compute(100.0, 0.0).unwrap().level_count(), 5);
        assert_eq!(three.compute(100.0, 0.0).unwrap().level_count(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn ticker_levels_carry_inputs() {
        let prices = |symbol: &str| (symbol == "SPY").then_some(100.0);
        let levels = calculator()
            .calculate_for_ticker("SPY", &prices, &FixedAngle(0.0))
            .unwrap();
        assert_eq!(levels.symbol, "SPY");
        assert_eq!(levels.price, 100.0);
        assert_eq!(levels.reference_angle, 0.0);
        assert_eq!(levels.levels.level_count(), 5);
    }

    #[test]
    fn unavailable_collaborators() {
        let calc = calculator();
        let no_price = |_: &str| None::<f64>;
        assert_eq!(
            calc.calculate_for_ticker("SPY", &no_price, &FixedAngle(0.0)),
            Err(Error::PriceUnavailable("SPY".to_string()))
        );

        let bad_price = |_: &str| Some(f64::NAN);
        assert!(matches!(
            calc.calculate_for_ticker("SPY", &bad_price, &FixedAngle(0.0)),
            Err(Error::PriceUnavailable(_))
        ));

        let price = |_: &str| Some(100.0);
        let no_angle = || None::<f64>;
        assert_eq!(
            calc.calculate_for_ticker("SPY", &price, &no_angle),
            Err(Error::AngleUnavailable)
        );
    }

    #[test]
    fn batch_keeps_going_after_failure() {
        let prices = |symbol: &str| match symbol {
            "AAA" => Some(100.0),
            "CCC" => Some(460.0),
            _ => None,
        };
        let results = calculator().calculate_for_tickers(&["AAA", "BBB", "CCC"], &prices, &FixedAngle(0.0));

        assert_eq!(results.len(), 3);
        assert!(results["AAA"].is_ok());
        assert_eq!(results["BBB"], Err(Error::PriceUnavailable("BBB".to_string())));
        assert!(results["CCC"].is_ok());
    }

    #[test]
    fn ticker_levels_json_shape() {
        let prices = |_: &str| Some(100.0);
        let levels = calculator()
            .calculate_for_ticker("SPY", &prices, &FixedAngle(0.0))
            .unwrap();
        let json: serde_json::Value = serde_json::to_value(&levels).unwrap();
        assert_eq!(json["symbol"], "SPY");
        assert_eq!(json["up_levels"].as_array().unwrap().len(), 5);
        assert_eq!(json["down_levels"].as_array().unwrap().len(), 5);

        let back: TickerLevels = serde_json::from_value(json).unwrap();
        assert_eq!(back, levels);
    }

    #[test]
    fn check_ticker_reports_breaches() {
        let calc = calculator();
        let start = |_: &str| Some(100.0);
        let stored = calc.calculate_for_ticker("SPY", &start, &FixedAngle(0.0)).unwrap();

        let moved = |_: &str| Some(101.0);
        let report = calc.check_ticker(&stored, &moved).unwrap();
        assert_eq!(report.previous_price, 100.0);
        assert_eq!(report.current_price, 101.0);
        assert!(report.breached_up);
        assert!(report.needs_recalculation());

        let gone = |_: &str| None::<f64>;
        assert!(matches!(calc.check_ticker(&stored, &gone), Err(Error::PriceUnavailable(_))));
    }

    #[test]
    fn one_shot_compute() {
        let result = compute_levels(100.0, 0.0, 150, 5).unwrap();
        assert_eq!(result, calculator().compute(100.0, 0.0).unwrap());
        assert!(compute_levels(100.0, 0.0, 10, 5).is_err());
    }
}
