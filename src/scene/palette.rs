//! Color cycling for generated structures
//!
//! Grid cells share one color phase; a radial wave on top of it makes the
//! center of the lattice pulse ahead of the rim.

use std::f64::consts::TAU;

/// Hue and glow for one cell in one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStyle {
    /// Hue in `[0, 1)`
    pub hue: f64,
    /// Emissive strength in `[0, 0.6]`
    pub emissive: f64,
}

/// Pulse parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            amplitude: 0.15,
            frequency: 0.5,
        }
    }
}

/// Falloff weight for a normalized distance from the center: `(1 − d)^1.5`
#[inline]
fn center_emphasis(distance: f64) -> f64 {
    (1.0 - distance.clamp(0.0, 1.0)).powf(1.5)
}

impl Pulse {
    /// Hue shift of the wave at `distance` (0 = center, 1 = rim) and `phase`
    pub fn offset(&self, distance: f64, phase: f64) -> f64 {
        let wave = (phase * TAU * self.frequency + distance * TAU).sin();
        wave * self.amplitude * center_emphasis(distance)
    }

    /// Style for a cell at `distance` when the shared phase is `phase`
    pub fn cell_style(&self, distance: f64, phase: f64) -> CellStyle {
        let emphasis = center_emphasis(distance);
        let offset = self.offset(distance, phase);
        CellStyle {
            hue: (phase + offset * (1.0 - emphasis * 0.3)).rem_euclid(1.0),
            emissive: 0.6 * emphasis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_rim_does_not_pulse() {
        let pulse = Pulse::default();
        for phase in [0.0, 0.25, 0.7] {
            assert!(pulse.offset(1.0, phase).abs() < EPSILON);
            let style = pulse.cell_style(1.0, phase);
            assert!((style.hue - phase).abs() < EPSILON);
            assert!(style.emissive.abs() < EPSILON);
        }
    }

    #[test]
    fn test_center_pulses_with_full_amplitude() {
        let pulse = Pulse::default();
        // phase 0.5 at frequency 0.5 puts the center wave at sin(π/2)
        assert!((pulse.offset(0.0, 0.5) - 0.15).abs() < EPSILON);
        assert!((pulse.cell_style(0.0, 0.0).emissive - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_hue_stays_in_unit_range() {
        let pulse = Pulse { amplitude: 0.9, frequency: 2.0 };
        for i in 0..50 {
            let style = pulse.cell_style(i as f64 / 50.0, 0.99);
            assert!((0.0..1.0).contains(&style.hue));
        }
    }
}
