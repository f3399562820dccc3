//! 8-Spoke Search
//!
//! A reference angle defines 8 spokes, 45° apart, starting at the reference
//! angle itself. A value lies on a spoke when its grid angle is within the
//! tolerance of that spoke's direction.
//!
//! The spokes radiate across the whole grid from its center. Which value a
//! caller is interested in plays no part in choosing the directions.

use crate::{circular_distance, normalize_degrees, PositionIndex, SPOKE_COUNT, SPOKE_SPACING};

/// The 8 spoke directions of a reference angle, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spokes {
    /// Spoke angles, starting at the reduced reference angle.
    pub angles: [f64; SPOKE_COUNT],
}

impl Spokes {
    /// Spokes anchored at `reference_angle`. Any real input is reduced modulo 360.
    pub fn from_reference(reference_angle: f64) -> Self {
        let mut angles = [0.0; SPOKE_COUNT];
        for (i, angle) in angles.iter_mut().enumerate() {
            *angle = normalize_degrees(reference_angle + SPOKE_SPACING * i as f64);
        }
        Self { angles }
    }

    /// Index of the spoke within `tolerance` of `angle`, if any.
    pub fn spoke_for(&self, angle: f64, tolerance: f64) -> Option<usize> {
        self.angles
            .iter()
            .position(|&spoke| circular_distance(angle, spoke) <= tolerance)
    }

    /// Whether `angle` lies on any spoke.
    pub fn contains(&self, angle: f64, tolerance: f64) -> bool {
        self.spoke_for(angle, tolerance).is_some()
    }
}

/// All values on the spokes, ascending.
///
/// Each spoke is searched in turn over every indexed value; the hits are
/// concatenated and sorted. Windows narrower than half the spoke spacing
/// never overlap, so no value is reported twice.
pub fn spoke_values(index: &PositionIndex, spokes: &Spokes, tolerance: f64) -> Vec<u32> {
    let mut values: Vec<u32> = spokes
        .angles
        .iter()
        .flat_map(move |&spoke| {
            index
                .angles()
                .filter(move |&(_, angle)| circular_distance(angle, spoke) <= tolerance)
                .map(|(value, _)| value)
        })
        .collect();

    values.sort_unstable();
    values
}
