//! Collaborator seams for prices and reference angles.
//!
//! Market data and ephemeris lookups live outside this crate. They plug in
//! through these traits; `None` means the collaborator had nothing usable.

/// Supplies the current price of a symbol.
pub trait PriceSource {
    fn current_price(&self, symbol: &str) -> Option<f64>;
}

impl<F> PriceSource for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn current_price(&self, symbol: &str) -> Option<f64> {
        self(symbol)
    }
}

/// Supplies the reference angle (the sun's ecliptic longitude) in degrees.
pub trait ReferenceAngleSource {
    fn reference_angle(&self) -> Option<f64>;
}

impl<F> ReferenceAngleSource for F
where
    F: Fn() -> Option<f64>,
{
    fn reference_angle(&self) -> Option<f64> {
        self()
    }
}

/// A reference angle that never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAngle(pub f64);

impl ReferenceAngleSource for FixedAngle {
    fn reference_angle(&self) -> Option<f64> {
        Some(self.0)
    }
}
