use crate::graph::Sources;
use crate::NoiseModule;

/// Raises source 0 to the power of source 1.
#[derive(Debug, Clone, Default)]
pub struct Power;

impl Power {
    pub fn new() -> Self {
        Self
    }
}

impl NoiseModule for Power {
    fn source_count(&self) -> usize {
        2
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        let base = sources.get_value(0, x, y, z);
        let exponent = sources.get_value(1, x, y, z);
        base.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::Power;
    use crate::{Const, NoiseGraph};

    #[test]
    fn power_of_two_sources() {
        let mut graph = NoiseGraph::new();
        let base = graph.add(Const::new(3.0));
        let exponent = graph.add(Const::new(2.0));
        let p = graph.add(Power::new());
        graph.set_sources(p, &[base, exponent]).unwrap();
        assert_eq!(graph.get_value(p, 0.0, 0.0, 0.0), 9.0);
    }

    #[test]
    fn negative_base_with_fraction_is_nan() {
        let mut graph = NoiseGraph::new();
        let base = graph.add(Const::new(-0.5));
        let exponent = graph.add(Const::new(0.5));
        let p = graph.add(Power::new());
        graph.set_sources(p, &[base, exponent]).unwrap();
        assert!(graph.get_value(p, 1.0, 1.0, 1.0).is_nan());
    }
}
