//! Ports (Interfaces) for the data-flow feature

/// Directed flow graph consumed by the solver.
///
/// Implementations are owned by the caller for the duration of one solve
/// call; the solver neither shares nor retains them beyond it.
pub trait FlowGraph<N> {
    /// Every node, in a fixed deterministic order. Sweeps visit nodes in
    /// exactly this order.
    fn nodes(&self) -> Vec<N>;

    /// Whether `node` is a head: its in-flow is supplied externally and
    /// never recomputed from predecessors.
    fn is_head(&self, node: &N) -> bool;

    /// Ordered predecessors of `node`
    fn predecessors(&self, node: &N) -> Vec<N>;
}
