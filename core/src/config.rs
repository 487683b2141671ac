// Default parameter values, valid ranges, and serde-loadable parameter sets
// for the configurable modules.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::noisegen::NoiseQuality;

/// Frequency of the first octave.
pub const DEFAULT_FREQUENCY: f64 = 1.0;
/// Frequency multiplier between successive octaves.
pub const DEFAULT_LACUNARITY: f64 = 2.0;
pub const DEFAULT_OCTAVE_COUNT: u32 = 6;
/// Amplitude multiplier between successive octaves.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
pub const DEFAULT_QUALITY: NoiseQuality = NoiseQuality::Standard;
pub const DEFAULT_SEED: i32 = 0;
pub const MIN_OCTAVE_COUNT: u32 = 1;
pub const MAX_OCTAVE_COUNT: u32 = 30;

/// Ridge height subtracted from by each octave's rectified signal.
pub const RIDGED_OFFSET: f64 = 0.8;

pub const DEFAULT_TURBULENCE_POWER: f64 = 1.0;
pub const DEFAULT_TURBULENCE_ROUGHNESS: u32 = 3;

pub const DEFAULT_SELECT_LOWER_BOUND: f64 = -1.0;
pub const DEFAULT_SELECT_UPPER_BOUND: f64 = 1.0;
pub const DEFAULT_SELECT_EDGE_FALLOFF: f64 = 0.0;

pub const DEFAULT_CONST_VALUE: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_BIAS: f64 = 0.0;
pub const DEFAULT_EXPONENT: f64 = 1.0;
pub const DEFAULT_POINT_SCALE: f64 = 1.0;
pub const DEFAULT_TRANSLATION: f64 = 0.0;
pub const DEFAULT_ROTATION: f64 = 0.0;

pub(crate) fn check_octave_count(octave_count: u32) -> NoiseResult<()> {
    if (MIN_OCTAVE_COUNT..=MAX_OCTAVE_COUNT).contains(&octave_count) {
        Ok(())
    } else {
        Err(NoiseError::invalid(format!(
            "octave count {octave_count} outside [{MIN_OCTAVE_COUNT}, {MAX_OCTAVE_COUNT}]"
        )))
    }
}

/// Parameters of the fractal generators (Perlin, Billow, RidgedMulti).
/// RidgedMulti has no use for `persistence`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    pub frequency: f64,
    pub lacunarity: f64,
    pub octave_count: u32,
    pub persistence: f64,
    pub quality: NoiseQuality,
    pub seed: i32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            octave_count: DEFAULT_OCTAVE_COUNT,
            persistence: DEFAULT_PERSISTENCE,
            quality: DEFAULT_QUALITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl FractalParams {
    pub fn validate(&self) -> NoiseResult<()> {
        check_octave_count(self.octave_count)
    }
}

/// Parameters of the Turbulence transformer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbulenceParams {
    pub frequency: f64,
    pub power: f64,
    /// Octave count of the displacement fields.
    pub roughness: u32,
    pub seed: i32,
}

impl Default for TurbulenceParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            power: DEFAULT_TURBULENCE_POWER,
            roughness: DEFAULT_TURBULENCE_ROUGHNESS,
            seed: DEFAULT_SEED,
        }
    }
}

impl TurbulenceParams {
    pub fn validate(&self) -> NoiseResult<()> {
        check_octave_count(self.roughness)
    }
}

/// Parameters of the Select module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectParams {
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Capped to half the bound span when applied.
    pub edge_falloff: f64,
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_SELECT_LOWER_BOUND,
            upper_bound: DEFAULT_SELECT_UPPER_BOUND,
            edge_falloff: DEFAULT_SELECT_EDGE_FALLOFF,
        }
    }
}

impl SelectParams {
    pub fn validate(&self) -> NoiseResult<()> {
        if !(self.lower_bound < self.upper_bound) {
            return Err(NoiseError::invalid(format!(
                "select lower bound {} must be below upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.edge_falloff.is_nan() {
            return Err(NoiseError::invalid("select edge falloff must not be NaN"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octave_bounds() {
        assert!(check_octave_count(0).is_err());
        assert!(check_octave_count(1).is_ok());
        assert!(check_octave_count(30).is_ok());
        assert!(check_octave_count(31).is_err());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let params: FractalParams =
            serde_json::from_str(r#"{ "octave_count": 4, "quality": "best" }"#).unwrap();
        assert_eq!(params.octave_count, 4);
        assert_eq!(params.quality, NoiseQuality::Best);
        assert_eq!(params.frequency, DEFAULT_FREQUENCY);
        assert_eq!(params.lacunarity, DEFAULT_LACUNARITY);
        assert_eq!(params.persistence, DEFAULT_PERSISTENCE);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn loaded_config_is_range_checked() {
        let params: TurbulenceParams = serde_json::from_str(r#"{ "roughness": 40 }"#).unwrap();
        assert!(matches!(params.validate(), Err(NoiseError::InvalidParameter(_))));

        let select: SelectParams =
            serde_json::from_str(r#"{ "lower_bound": 0.5, "upper_bound": 0.5 }"#).unwrap();
        assert!(select.validate().is_err());
        assert!(SelectParams::default().validate().is_ok());

        let select = SelectParams {
            edge_falloff: f64::NAN,
            ..SelectParams::default()
        };
        assert!(select.validate().is_err());
    }
}
