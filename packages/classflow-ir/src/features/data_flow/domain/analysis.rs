//! Analysis problem contract
//!
//! The solver is parameterized by an externally supplied problem: the
//! lattice value type `D`, its meet operator, and the per-node transfer
//! function. The solver validates none of the lattice laws itself; a
//! problem violating them is a caller-side contract violation observable
//! only as non-termination (or a tripped sweep ceiling).

/// Monotone data-flow problem over domain `D` and node type `N`
pub trait DataflowAnalysis<D, N> {
    /// Lattice unit used both as the starting out-flow of every node and
    /// as the identity of meet reductions
    fn new_initial_value(&self) -> D;

    /// Fold `other` into the accumulated value `acc`.
    ///
    /// Must be idempotent, commutative, associative and monotone with
    /// respect to the lattice order.
    fn meet(&self, acc: D, other: &D) -> D;

    /// Recompute `output` in place from `input`; returns whether `output`
    /// changed. Must be monotone.
    fn transfer(&self, input: &D, node: &N, output: &mut D) -> bool;
}
