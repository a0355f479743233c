use crate::domains::GraphDomain;

pub const OPEN_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/open.txt"));

pub const WALL_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/wall.txt"));

pub const BLOCKED_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/blocked.txt"));

/// `start -> a -> goal`, reward -1 per edge, heuristic 0 everywhere.
pub fn line_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph.add_edge("start", "a", -1.).add_edge("a", "goal", -1.);
    graph
}

/// A shortcut `start -> goal` with reward -5 next to the two-hop path
/// `start -> mid -> goal` with reward -2. The heuristic is exact on the
/// two-hop path but rates the goal higher than `mid`, which makes greedy
/// search jump to the goal over the shortcut.
pub fn shortcut_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "goal", -5.)
        .add_edge("start", "mid", -1.)
        .add_edge("mid", "goal", -1.)
        .set_heuristic("start", -2.)
        .set_heuristic("mid", -1.);
    graph
}

/// `c` is first reached over the expensive edge `start -> c` and closed,
/// then reached again more cheaply over `start -> a -> c`. The pessimistic
/// estimate for `a` delays its expansion until after `c` was closed.
pub fn reopening_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "c", -5.)
        .add_edge("start", "a", -1.)
        .add_edge("a", "c", -1.)
        .add_edge("c", "goal", -1.)
        .set_heuristic("a", -4.5);
    graph
}

/// A cycle `start -> a -> b -> start` without any goal.
pub fn cycle_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "a", -1.)
        .add_edge("a", "b", -1.)
        .add_edge("b", "start", -1.);
    graph
}

/// The only way to the goal leads through the terminal node `t`.
pub fn terminal_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "t", -1.)
        .add_edge("t", "goal", -1.)
        .set_terminal("t");
    graph
}

/// A branching graph whose heuristic does not depend on `scale`, while
/// every reward is multiplied by it.
pub fn branching_graph(scale: f64) -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "a", -1. * scale)
        .add_edge("start", "b", -3. * scale)
        .add_edge("a", "c", -2. * scale)
        .add_edge("b", "d", -1. * scale)
        .add_edge("c", "goal", -4. * scale)
        .add_edge("d", "c", -1. * scale)
        .add_edge("d", "e", -2. * scale)
        .add_edge("e", "goal", -1. * scale)
        .set_heuristic("start", -4.)
        .set_heuristic("a", -3.)
        .set_heuristic("b", -2.)
        .set_heuristic("c", -1.)
        .set_heuristic("d", -2.5)
        .set_heuristic("e", -0.5);
    graph
}

/// `start <-> a` with reward +1 each way, then `a -> b -> goal` with reward
/// -1 per edge. Going back to `start` always improves its accumulated
/// reward.
pub fn positive_cycle_graph() -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "a", 1.)
        .add_edge("a", "start", 1.)
        .add_edge("a", "b", -1.)
        .add_edge("b", "goal", -1.)
        .set_heuristic("start", -3.)
        .set_heuristic("a", -2.)
        .set_heuristic("b", -1.);
    graph
}

/// `a` and `c` are reached first over `start -> a` and later again over
/// `start -> b`. Whether the second path is better depends on
/// `first_reward`, the reward of `start -> a`.
pub fn detour_graph(first_reward: f64) -> GraphDomain {
    let mut graph = GraphDomain::new();
    graph
        .add_edge("start", "a", first_reward)
        .add_edge("start", "b", -1.)
        .add_edge("b", "a", -1.)
        .add_edge("a", "c", -1.)
        .add_edge("b", "c", -1.)
        .set_heuristic("start", -3.)
        .set_heuristic("a", -1.)
        .set_heuristic("b", -2.)
        .set_heuristic("c", -1.5);
    graph
}
