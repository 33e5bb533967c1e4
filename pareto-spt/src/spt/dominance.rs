//! The dominance relation between two states at the same vertex.

use crate::domain::PathState;

use super::config::DominanceConfig;

/// Returns true if state `a` renders state `b` obsolete.
///
/// Both states must be at the same vertex. The checks run in order:
///
/// 1. A zero-weight `b` is never dominated. This also guards the ratio
///    tests below against division by zero.
/// 2. States with different [`ModeFlags`](crate::domain::ModeFlags) are
///    incomparable.
/// 3. If `a` arrived over a turn-restricted edge that `b` did not use, the
///    two are incomparable.
/// 4. If `a`'s route history is contained in `b`'s, strict dominance on
///    weight and elapsed time decides.
/// 5. Otherwise walk distance, weight and elapsed time must all fall within
///    the tolerances of `config`.
pub fn dominates<S: PathState>(a: &S, b: &S, config: &DominanceConfig) -> bool {
    if b.weight() == 0.0 {
        return false;
    }

    if a.mode() != b.mode() {
        return false;
    }

    if let Some(edge) = a.back_edge() {
        if edge.restricted && edge.differs_from(b.back_edge().as_ref()) {
            return false;
        }
    }

    if a.route_sequence_subset(b) {
        return a.weight() <= b.weight() && a.elapsed_seconds() <= b.elapsed_seconds();
    }

    walk_is_hopeful(a, b, config)
        && weight_is_hopeful(a, b, config)
        && time_is_hopeful(a, b, config)
}

fn walk_is_hopeful<S: PathState>(a: &S, b: &S, config: &DominanceConfig) -> bool {
    a.walk_distance() / b.walk_distance() < 1.0 + config.walk_epsilon
}

fn weight_is_hopeful<S: PathState>(a: &S, b: &S, config: &DominanceConfig) -> bool {
    let ratio = a.weight() / b.weight();
    ratio < 1.0 + config.cost_epsilon && a.weight() - b.weight() < config.cost_margin
}

fn time_is_hopeful<S: PathState>(a: &S, b: &S, config: &DominanceConfig) -> bool {
    let t1 = a.elapsed_seconds() as f64;
    let t2 = b.elapsed_seconds() as f64;
    t1 / t2 < 1.0 + config.time_epsilon && t1 - t2 <= config.time_margin_secs as f64
}
