// Modules that pick or mix between two sources under the control of a third
use crate::config::SelectParams;
use crate::error::{NoiseError, NoiseResult};
use crate::graph::Sources;
use crate::interp::{linear_interp, s_curve};
use crate::NoiseModule;

/// Chooses between source 0 and source 1 by the value of the selector
/// source.
///
/// Source 1 is returned while the selector lies within the bounds, source 0
/// outside of them. A non-zero edge falloff smooths the switch over a band of
/// that half-width around each bound.
#[derive(Debug, Clone, Default)]
pub struct Select {
    params: SelectParams,
}

impl Select {
    /// Slot of the selector source.
    pub const SELECTOR: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parameter set. The falloff is checked and capped as by
    /// [`Select::set_edge_falloff`].
    pub fn from_params(params: SelectParams) -> NoiseResult<Self> {
        let mut select = Self::new();
        select.set_bounds(params.lower_bound, params.upper_bound)?;
        select.set_edge_falloff(params.edge_falloff)?;
        Ok(select)
    }

    pub fn lower_bound(&self) -> f64 {
        self.params.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.params.upper_bound
    }

    pub fn edge_falloff(&self) -> f64 {
        self.params.edge_falloff
    }

    /// Fails unless `lower < upper`. The falloff is re-capped to fit the new
    /// span.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        if !(lower < upper) {
            return Err(NoiseError::invalid(format!(
                "select lower bound {lower} must be below upper bound {upper}"
            )));
        }
        self.params.lower_bound = lower;
        self.params.upper_bound = upper;
        self.cap_edge_falloff(self.params.edge_falloff);
        Ok(())
    }

    /// Half-width of the smoothing band around each bound, capped to half
    /// the bound span so the two bands never overlap. Zero or less gives a
    /// hard switch. Fails if `falloff` is NaN.
    pub fn set_edge_falloff(&mut self, falloff: f64) -> NoiseResult<()> {
        if falloff.is_nan() {
            return Err(NoiseError::invalid("select edge falloff must not be NaN"));
        }
        self.cap_edge_falloff(falloff);
        Ok(())
    }

    fn cap_edge_falloff(&mut self, falloff: f64) {
        let half_span = (self.params.upper_bound - self.params.lower_bound) / 2.0;
        self.params.edge_falloff = if falloff > half_span {
            log::debug!("select edge falloff {falloff} capped to {half_span}");
            half_span
        } else {
            falloff
        };
    }
}

impl NoiseModule for Select {
    fn source_count(&self) -> usize {
        3
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let control = sources.get_value(Self::SELECTOR, x, y, z);
        let SelectParams {
            lower_bound: lower,
            upper_bound: upper,
            edge_falloff: falloff,
        } = self.params;

        if falloff > 0.0 {
            if control < lower - falloff {
                sources.get_value(0, x, y, z)
            } else if control < lower + falloff {
                // Lower band, easing from source 0 into source 1
                let curve_lo = lower - falloff;
                let curve_hi = lower + falloff;
                let alpha = s_curve((control - curve_lo) / (curve_hi - curve_lo));
                linear_interp(
                    sources.get_value(0, x, y, z),
                    sources.get_value(1, x, y, z),
                    alpha,
                )
            } else if control < upper - falloff {
                sources.get_value(1, x, y, z)
            } else if control < upper + falloff {
                // Upper band, easing back into source 0
                let curve_lo = upper - falloff;
                let curve_hi = upper + falloff;
                let alpha = s_curve((control - curve_lo) / (curve_hi - curve_lo));
                linear_interp(
                    sources.get_value(1, x, y, z),
                    sources.get_value(0, x, y, z),
                    alpha,
                )
            } else {
                sources.get_value(0, x, y, z)
            }
        } else if control < lower || control > upper {
            sources.get_value(0, x, y, z)
        } else {
            sources.get_value(1, x, y, z)
        }
    }
}

/// Linear blend of source 0 and source 1, weighted by the raw value of the
/// control source: 0 gives source 0, 1 gives source 1.
#[derive(Debug, Clone, Default)]
pub struct Blend;

impl Blend {
    /// Slot of the control source.
    pub const CONTROL: usize = 2;

    pub fn new() -> Self {
        Self
    }
}

impl NoiseModule for Blend {
    fn source_count(&self) -> usize {
        3
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let v0 = sources.get_value(0, x, y, z);
        let v1 = sources.get_value(1, x, y, z);
        let alpha = sources.get_value(Self::CONTROL, x, y, z);
        linear_interp(v0, v1, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, NodeId, NoiseGraph};
    use approx::assert_abs_diff_eq;

    struct Rig {
        graph: NoiseGraph,
        node: NodeId,
        control: NodeId,
    }

    impl Rig {
        fn new<M: NoiseModule>(module: M) -> Self {
            let mut graph = NoiseGraph::new();
            let a = graph.add(Const::new(-10.0));
            let b = graph.add(Const::new(10.0));
            let control = graph.add(Const::new(0.0));
            let node = graph.add(module);
            graph.set_sources(node, &[a, b, control]).unwrap();
            Self {
                graph,
                node,
                control,
            }
        }

        fn at(&mut self, control: f64) -> f64 {
            self.graph
                .module_mut::<Const>(self.control)
                .unwrap()
                .set_value(control);
            self.graph.get_value(self.node, 0.3, 0.6, 0.9)
        }
    }

    fn select(lower: f64, upper: f64, falloff: f64) -> Select {
        let mut s = Select::new();
        s.set_bounds(lower, upper).unwrap();
        s.set_edge_falloff(falloff).unwrap();
        s
    }

    #[test]
    fn hard_switch_between_bounds() {
        let mut rig = Rig::new(select(-0.5, 0.5, 0.0));
        assert_eq!(rig.at(0.9), -10.0);
        assert_eq!(rig.at(0.0), 10.0);
        assert_eq!(rig.at(-0.9), -10.0);
        // Bounds are inclusive
        assert_eq!(rig.at(0.5), 10.0);
        assert_eq!(rig.at(-0.5), 10.0);
    }

    #[test]
    fn falloff_zones() {
        let mut rig = Rig::new(select(-0.5, 0.5, 0.25));
        assert_eq!(rig.at(-0.8), -10.0);
        assert_eq!(rig.at(0.0), 10.0);
        assert_eq!(rig.at(0.8), -10.0);
        // Band centres sit halfway between the two sources
        assert_abs_diff_eq!(rig.at(-0.5), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rig.at(0.5), 0.0, epsilon = 1e-12);
        // Quarter into the lower band: s_curve3(0.25) = 0.15625
        assert_abs_diff_eq!(rig.at(-0.625), -10.0 + 20.0 * 0.15625, epsilon = 1e-12);
    }

    #[test]
    fn falloff_is_continuous_across_bands() {
        let mut rig = Rig::new(select(-0.5, 0.5, 0.2));
        let mut prev = rig.at(-1.0);
        for i in 1..=200 {
            let c = -1.0 + f64::from(i) * 0.01;
            let v = rig.at(c);
            assert!((v - prev).abs() < 1.0, "jump at {c}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn falloff_capped_to_half_span() {
        let mut s = select(0.0, 1.0, 0.0);
        s.set_edge_falloff(3.0).unwrap();
        assert_eq!(s.edge_falloff(), 0.5);
        // Narrowing the bounds re-caps the current falloff
        s.set_bounds(0.0, 0.4).unwrap();
        assert_abs_diff_eq!(s.edge_falloff(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn nan_falloff_is_rejected() {
        let mut s = select(-0.5, 0.5, 0.25);
        assert!(matches!(
            s.set_edge_falloff(f64::NAN),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert_eq!(s.edge_falloff(), 0.25);

        let params = SelectParams {
            edge_falloff: f64::NAN,
            ..SelectParams::default()
        };
        assert!(Select::from_params(params).is_err());

        // Negative falloff is allowed and switches hard
        s.set_edge_falloff(-1.0).unwrap();
        let mut rig = Rig::new(s);
        assert_eq!(rig.at(0.49), 10.0);
        assert_eq!(rig.at(0.51), -10.0);
    }

    #[test]
    fn bounds_must_increase() {
        let mut s = Select::new();
        assert!(matches!(
            s.set_bounds(0.5, 0.5),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(s.set_bounds(1.0, -1.0).is_err());
        assert!(s.set_bounds(f64::NAN, 1.0).is_err());
        assert_eq!((s.lower_bound(), s.upper_bound()), (-1.0, 1.0));
    }

    #[test]
    fn from_params_caps_falloff() {
        let params = SelectParams {
            lower_bound: 0.0,
            upper_bound: 0.5,
            edge_falloff: 1.0,
        };
        let s = Select::from_params(params).unwrap();
        assert_eq!(s.edge_falloff(), 0.25);
        let bad = SelectParams {
            lower_bound: 1.0,
            ..SelectParams::default()
        };
        assert!(Select::from_params(bad).is_err());
    }

    #[test]
    fn blend_uses_raw_control() {
        let mut rig = Rig::new(Blend::new());
        assert_eq!(rig.at(0.0), -10.0);
        assert_eq!(rig.at(1.0), 10.0);
        assert_abs_diff_eq!(rig.at(0.25), -5.0, epsilon = 1e-12);
        // Not remapped from [-1, 1]
        assert_abs_diff_eq!(rig.at(-1.0), -30.0, epsilon = 1e-12);
    }
}
