//! End-to-end fixed-point solver tests
//!
//! Exercises both meet polarities (OR-style reachability and AND-style
//! must-analysis), head-node pinning, and convergence bookkeeping on
//! graphs with joins, cycles and unreachable components.

use classflow_ir::{AdjacencyGraph, DataflowAnalysis, IterativeSolver, SolverError};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

/// Forward may-reachability: out = in, facts join with OR
struct Reachability;

impl DataflowAnalysis<bool, &'static str> for Reachability {
    fn new_initial_value(&self) -> bool {
        false
    }

    fn meet(&self, acc: bool, other: &bool) -> bool {
        acc || *other
    }

    fn transfer(&self, input: &bool, _node: &&'static str, output: &mut bool) -> bool {
        let changed = *output != *input;
        *output = *input;
        changed
    }
}

/// All-paths (must) analysis: out = in, facts combine with AND
struct MustReach;

impl DataflowAnalysis<bool, &'static str> for MustReach {
    fn new_initial_value(&self) -> bool {
        true
    }

    fn meet(&self, acc: bool, other: &bool) -> bool {
        acc && *other
    }

    fn transfer(&self, input: &bool, _node: &&'static str, output: &mut bool) -> bool {
        let changed = *output != *input;
        *output = *input;
        changed
    }
}

/// Saturating hop counter used to observe head pinning; the cap keeps the
/// lattice finite.
struct HopCount;

impl DataflowAnalysis<u32, &'static str> for HopCount {
    fn new_initial_value(&self) -> u32 {
        0
    }

    fn meet(&self, acc: u32, other: &u32) -> u32 {
        acc.max(*other)
    }

    fn transfer(&self, input: &u32, _node: &&'static str, output: &mut u32) -> bool {
        let next = (*input + 1).min(10);
        let changed = next != *output;
        *output = next;
        changed
    }
}

#[test]
fn test_reachability_matches_graph_reachability() {
    // entry -> a -> b -> c with a back edge c -> a; island x <-> y
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("entry");
    graph.add_edge("entry", "a");
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "a");
    graph.add_edge("x", "y");
    graph.add_edge("y", "x");

    let solution = IterativeSolver::new()
        .solve(&Reachability, &graph, IndexMap::from([("entry", true)]))
        .unwrap();

    for node in ["entry", "a", "b", "c"] {
        assert_eq!(solution.out_of(&node), Some(&true), "node {node}");
    }
    for node in ["x", "y"] {
        assert_eq!(solution.out_of(&node), Some(&false), "node {node}");
    }
    assert_eq!(solution.stats.nodes, 6);
}

#[test]
fn test_and_meet_requires_all_predecessors() {
    // good and bad both feed join; only good carries `true`
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("good");
    graph.mark_head("bad");
    graph.add_edge("good", "straight");
    graph.add_edge("good", "join");
    graph.add_edge("bad", "join");
    graph.add_edge("join", "after");

    let solution = IterativeSolver::new()
        .solve(
            &MustReach,
            &graph,
            IndexMap::from([("good", true), ("bad", false)]),
        )
        .unwrap();

    assert_eq!(solution.out_of(&"straight"), Some(&true));
    assert_eq!(solution.out_of(&"join"), Some(&false));
    assert_eq!(solution.out_of(&"after"), Some(&false));
}

#[test]
fn test_head_in_flow_is_never_recomputed() {
    // Cycle back into the head: a recomputed head in-flow would keep
    // climbing toward the cap; a pinned one stays at its seed.
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("entry");
    graph.add_edge("entry", "mid");
    graph.add_edge("mid", "last");
    graph.add_edge("last", "entry");

    let solution = IterativeSolver::new()
        .solve(&HopCount, &graph, IndexMap::from([("entry", 5)]))
        .unwrap();

    assert_eq!(solution.in_of(&"entry"), Some(&5));
    assert_eq!(solution.out_of(&"entry"), Some(&6));
    assert_eq!(solution.out_of(&"mid"), Some(&7));
    assert_eq!(solution.out_of(&"last"), Some(&8));
}

#[test]
fn test_converged_maps_iterate_in_enumeration_order() {
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("entry");
    graph.add_edge("entry", "a");
    graph.add_edge("a", "b");

    let solution = IterativeSolver::new()
        .solve(&Reachability, &graph, IndexMap::from([("entry", true)]))
        .unwrap();

    let order: Vec<&str> = solution.out_flow.keys().copied().collect();
    assert_eq!(order, vec!["entry", "a", "b"]);
}

#[test]
fn test_resume_reports_single_no_change_sweep() {
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("entry");
    graph.add_edge("entry", "a");
    graph.add_edge("a", "b");
    graph.add_edge("b", "a");

    let solver = IterativeSolver::new();
    let solution = solver
        .solve(&Reachability, &graph, IndexMap::from([("entry", true)]))
        .unwrap();
    let converged_out = solution.out_flow.clone();

    let again = solver.resume(&Reachability, &graph, solution).unwrap();
    assert_eq!(again.stats.sweeps, 1);
    assert_eq!(again.out_flow, converged_out);
}

#[test]
fn test_missing_head_seed_is_a_configuration_error() {
    let mut graph = AdjacencyGraph::new();
    graph.mark_head("entry");
    graph.mark_head("other");
    graph.add_edge("entry", "a");

    let err = IterativeSolver::new()
        .solve(&Reachability, &graph, IndexMap::from([("entry", true)]))
        .unwrap_err();
    assert_eq!(
        err,
        SolverError::UnseededHead {
            node: "\"other\"".to_string()
        }
    );
}
