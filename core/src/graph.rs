// Arena that owns every module of a noise graph.
//
// Modules refer to their inputs by `NodeId`, so the graph owns all nodes and
// a handle can never dangle. Wiring is checked when it is made; whole-graph
// properties (every slot connected, no cycles) are checked by `validate`.

use std::fmt;

use crate::NoiseModule;
use crate::error::{NoiseError, NoiseResult};

/// Handle to a module stored in a [`NoiseGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its graph, in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Node {
    module: Box<dyn NoiseModule>,
    sources: Vec<Option<NodeId>>,
}

/// Source slots of the module being evaluated.
pub struct Sources<'a> {
    graph: &'a NoiseGraph,
    node: NodeId,
    slots: &'a [Option<NodeId>],
}

impl Sources<'_> {
    /// Value of source `index` at (x, y, z).
    ///
    /// # Panics
    /// If the slot was never connected. Validate the graph first when that
    /// cannot be ruled out.
    #[inline]
    pub fn get_value(&self, index: usize, x: f64, y: f64, z: f64) -> f64 {
        match self.slots.get(index).copied().flatten() {
            Some(source) => self.graph.get_value(source, x, y, z),
            None => panic!(
                "source module {index} of node {} is not connected",
                self.node
            ),
        }
    }

    /// The node whose sources these are.
    pub fn node(&self) -> NodeId {
        self.node
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    InProgress,
    Done,
}

/// Owner of a set of noise modules and the connections between them.
#[derive(Default)]
pub struct NoiseGraph {
    nodes: Vec<Node>,
}

impl NoiseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module with all of its source slots unconnected.
    pub fn add<M: NoiseModule>(&mut self, module: M) -> NodeId {
        let id = NodeId(self.nodes.len());
        let sources = vec![None; module.source_count()];
        self.nodes.push(Node {
            module: Box::new(module),
            sources,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> NoiseResult<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| NoiseError::invalid(format!("node {id} does not belong to this graph")))
    }

    fn node_mut(&mut self, id: NodeId) -> NoiseResult<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| NoiseError::invalid(format!("node {id} does not belong to this graph")))
    }

    /// The module at `id` as its concrete type.
    pub fn module<M: NoiseModule>(&self, id: NodeId) -> NoiseResult<&M> {
        self.node(id)?
            .module
            .as_ref()
            .as_any()
            .downcast_ref::<M>()
            .ok_or_else(|| wrong_kind::<M>(id))
    }

    /// Mutable access to the module at `id`, for changing its parameters.
    pub fn module_mut<M: NoiseModule>(&mut self, id: NodeId) -> NoiseResult<&mut M> {
        self.node_mut(id)?
            .module
            .as_mut()
            .as_any_mut()
            .downcast_mut::<M>()
            .ok_or_else(|| wrong_kind::<M>(id))
    }

    pub fn source_count(&self, id: NodeId) -> NoiseResult<usize> {
        Ok(self.node(id)?.sources.len())
    }

    /// Connect `source` to slot `index` of `id`.
    pub fn set_source(&mut self, id: NodeId, index: usize, source: NodeId) -> NoiseResult<()> {
        self.node(source)?;
        let node = self.node_mut(id)?;
        let count = node.sources.len();
        let slot = node.sources.get_mut(index).ok_or_else(|| {
            NoiseError::invalid(format!(
                "source index {index} out of range for node {id} with {count} source(s)"
            ))
        })?;
        *slot = Some(source);
        node.module.source_changed();
        log::trace!("node {id} source {index} <- {source}");
        Ok(())
    }

    /// Connect `sources` to slots `0..sources.len()` of `id`.
    pub fn set_sources(&mut self, id: NodeId, sources: &[NodeId]) -> NoiseResult<()> {
        for (index, &source) in sources.iter().enumerate() {
            self.set_source(id, index, source)?;
        }
        Ok(())
    }

    /// The module connected to slot `index` of `id`.
    pub fn source(&self, id: NodeId, index: usize) -> NoiseResult<NodeId> {
        let node = self.node(id)?;
        match node.sources.get(index) {
            Some(Some(source)) => Ok(*source),
            Some(None) => Err(NoiseError::MissingSourceModule { node: id, index }),
            None => Err(NoiseError::invalid(format!(
                "source index {index} out of range for node {id} with {} source(s)",
                node.sources.len()
            ))),
        }
    }

    /// Evaluate the module at `id`.
    ///
    /// No checks are made; an unconnected slot panics and a cycle recurses
    /// until the stack overflows. Use [`NoiseGraph::evaluator`] to validate
    /// first.
    #[inline]
    pub fn get_value(&self, id: NodeId, x: f64, y: f64, z: f64) -> f64 {
        let node = &self.nodes[id.0];
        let sources = Sources {
            graph: self,
            node: id,
            slots: &node.sources,
        };
        node.module.get_value(&sources, x, y, z)
    }

    /// Check every module reachable from `root`: all source slots connected,
    /// no cycles, and each module's own parameter checks.
    /// All problems are collected into a single [`NoiseError::InvalidGraph`].
    pub fn validate(&self, root: NodeId) -> NoiseResult<()> {
        self.node(root)?;

        let mut errors = Vec::new();
        let mut state = vec![Visit::Unseen; self.nodes.len()];
        let mut reached = 1usize;

        state[root.0] = Visit::InProgress;
        if let Err(err) = self.nodes[root.0].module.validate() {
            errors.push(err);
        }

        // Depth-first walk; each frame is (node, next slot to visit)
        let mut stack = vec![(root, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (id, slot) = *frame;
            let node = &self.nodes[id.0];
            if slot == node.sources.len() {
                state[id.0] = Visit::Done;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let Some(source) = node.sources[slot] else {
                errors.push(NoiseError::MissingSourceModule { node: id, index: slot });
                continue;
            };
            match state[source.0] {
                Visit::Done => {}
                Visit::InProgress => errors.push(NoiseError::CyclicGraph(source)),
                Visit::Unseen => {
                    state[source.0] = Visit::InProgress;
                    reached += 1;
                    if let Err(err) = self.nodes[source.0].module.validate() {
                        errors.push(err);
                    }
                    stack.push((source, 0));
                }
            }
        }

        if errors.is_empty() {
            log::debug!("graph rooted at {root} is valid ({reached} module(s) reachable)");
            Ok(())
        } else {
            log::warn!(
                "graph rooted at {root} failed validation with {} error(s)",
                errors.len()
            );
            Err(NoiseError::InvalidGraph(errors))
        }
    }

    /// Validate the graph below `root` and return an evaluator for it.
    ///
    /// The evaluator borrows the graph, so the graph cannot be rewired while
    /// it is in use.
    pub fn evaluator(&self, root: NodeId) -> NoiseResult<Evaluator<'_>> {
        self.validate(root)?;
        Ok(Evaluator { graph: self, root })
    }
}

fn wrong_kind<M>(id: NodeId) -> NoiseError {
    NoiseError::invalid(format!(
        "node {id} is not a {}",
        std::any::type_name::<M>()
    ))
}

/// A validated root module, ready for sampling.
pub struct Evaluator<'a> {
    graph: &'a NoiseGraph,
    root: NodeId,
}

impl Evaluator<'_> {
    #[inline]
    pub fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        self.graph.get_value(self.root, x, y, z)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, ScaleBias, Select, Terrace};

    fn scaled_const(graph: &mut NoiseGraph, value: f64) -> (NodeId, NodeId) {
        let c = graph.add(Const::new(value));
        let sb = graph.add(ScaleBias::new());
        graph.set_source(sb, 0, c).unwrap();
        (c, sb)
    }

    #[test]
    fn add_sizes_source_slots() {
        let mut graph = NoiseGraph::new();
        let c = graph.add(Const::new(1.0));
        let s = graph.add(Select::new());
        assert_eq!(graph.source_count(c).unwrap(), 0);
        assert_eq!(graph.source_count(s).unwrap(), 3);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn set_source_rejects_out_of_range_index() {
        let mut graph = NoiseGraph::new();
        let (c, sb) = scaled_const(&mut graph, 1.0);
        assert!(matches!(
            graph.set_source(sb, 1, c),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(matches!(
            graph.set_source(c, 0, sb),
            Err(NoiseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn set_source_rejects_foreign_handles() {
        let mut graph = NoiseGraph::new();
        let sb = graph.add(ScaleBias::new());
        let stranger = NodeId::from_index(40);
        assert!(matches!(
            graph.set_source(sb, 0, stranger),
            Err(NoiseError::InvalidParameter(_))
        ));
    }

    #[test]
    fn source_reports_missing_module() {
        let mut graph = NoiseGraph::new();
        let sb = graph.add(ScaleBias::new());
        assert_eq!(
            graph.source(sb, 0),
            Err(NoiseError::MissingSourceModule { node: sb, index: 0 })
        );
        let c = graph.add(Const::new(2.0));
        graph.set_source(sb, 0, c).unwrap();
        assert_eq!(graph.source(sb, 0), Ok(c));
    }

    #[test]
    fn typed_module_access() {
        let mut graph = NoiseGraph::new();
        let (c, sb) = scaled_const(&mut graph, 0.5);
        graph.module_mut::<ScaleBias>(sb).unwrap().set_scale(4.0);
        assert_eq!(graph.module::<ScaleBias>(sb).unwrap().scale(), 4.0);
        assert!(graph.module::<ScaleBias>(c).is_err());
        assert_eq!(graph.get_value(sb, 0.0, 0.0, 0.0), 2.0);
    }

    #[test]
    fn validate_accepts_wired_dag() {
        let mut graph = NoiseGraph::new();
        let (c, sb) = scaled_const(&mut graph, 0.25);
        // Diamond: both select inputs share one scale-bias
        let sel = graph.add(Select::new());
        graph.set_sources(sel, &[sb, sb, c]).unwrap();
        assert!(graph.validate(sel).is_ok());
        let eval = graph.evaluator(sel).unwrap();
        assert_eq!(eval.root(), sel);
        assert_eq!(eval.get_value(1.0, 2.0, 3.0), 0.25);
    }

    #[test]
    fn validate_collects_every_missing_source() {
        let mut graph = NoiseGraph::new();
        let sel = graph.add(Select::new());
        let c = graph.add(Const::new(0.0));
        graph.set_source(sel, 1, c).unwrap();
        match graph.validate(sel) {
            Err(NoiseError::InvalidGraph(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        NoiseError::MissingSourceModule { node: sel, index: 0 },
                        NoiseError::MissingSourceModule { node: sel, index: 2 },
                    ]
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn validate_detects_cycles() {
        let mut graph = NoiseGraph::new();
        let a = graph.add(ScaleBias::new());
        let b = graph.add(ScaleBias::new());
        graph.set_source(a, 0, b).unwrap();
        graph.set_source(b, 0, a).unwrap();
        match graph.validate(a) {
            Err(NoiseError::InvalidGraph(errors)) => {
                assert_eq!(errors, vec![NoiseError::CyclicGraph(a)]);
            }
            other => panic!("unexpected {other:?}"),
        }

        let selfish = graph.add(ScaleBias::new());
        graph.set_source(selfish, 0, selfish).unwrap();
        assert!(graph.evaluator(selfish).is_err());
    }

    #[test]
    fn validate_runs_module_checks() {
        let mut graph = NoiseGraph::new();
        let c = graph.add(Const::new(0.0));
        let terrace = graph.add(Terrace::new());
        graph.set_source(terrace, 0, c).unwrap();
        match graph.validate(terrace) {
            Err(NoiseError::InvalidGraph(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(errors[0], NoiseError::InvalidParameter(_)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn validate_ignores_unreachable_nodes() {
        let mut graph = NoiseGraph::new();
        let (_, sb) = scaled_const(&mut graph, 1.0);
        graph.add(ScaleBias::new());
        assert!(graph.validate(sb).is_ok());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn graphs_cross_threads() {
        assert_send_sync::<NoiseGraph>();
        assert_send_sync::<Evaluator<'static>>();

        let mut graph = NoiseGraph::new();
        let (_, sb) = scaled_const(&mut graph, 0.75);
        graph.module_mut::<ScaleBias>(sb).unwrap().set_bias(0.25);
        let moved = std::thread::spawn(move || graph.get_value(sb, 1.0, 2.0, 3.0))
            .join()
            .unwrap();
        assert_eq!(moved, 1.0);
    }

    #[test]
    #[should_panic(expected = "is not connected")]
    fn evaluating_unwired_slot_panics() {
        let mut graph = NoiseGraph::new();
        let sb = graph.add(ScaleBias::new());
        let _ = graph.get_value(sb, 0.0, 0.0, 0.0);
    }
}
