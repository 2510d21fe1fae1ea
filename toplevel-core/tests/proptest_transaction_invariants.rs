//! Property tests for the pending / committed / current pipeline of a toplevel.
//!
//! Arbitrary interleavings of pending writes, commits and (possibly stale or duplicated)
//! acknowledgments must keep these invariants:
//!
//! 1. A commit copies the pending state verbatim and leaves current alone
//! 2. Only the acknowledgment of the latest commit changes current
//! 3. An obedient acknowledgment makes current equal committed
//! 4. A disobedient acknowledgment keeps the gravity edges in place

use proptest::prelude::*;
use toplevel_core::models::{
    AckOutcome, Commit, Dimensions, Edges, Geometry, Margins, Maximization, Toplevel,
};

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    SetGeometry(Geometry),
    SetGravity(Edges),
    SetMargins(Margins),
    SetMaximization(Maximization),
    SetFullscreen(bool),
    Map(bool),
    Commit,
    /// Acknowledge the n-th most recent commit (0 = latest) at its requested size.
    AckObedient(usize),
    /// Acknowledge the latest commit with a size of the client's choosing.
    AckDisobedient(Dimensions),
}

fn geometry_strategy() -> impl Strategy<Value = Geometry> {
    (-2_000i32..2_000, -2_000i32..2_000, 1i32..3_000, 1i32..3_000)
        .prop_map(|(x, y, w, h)| Geometry::new(x, y, w, h))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        geometry_strategy().prop_map(Op::SetGeometry),
        (0u32..16).prop_map(|bits| Op::SetGravity(Edges::from_bits_truncate(bits))),
        (0i32..40, 0i32..10).prop_map(|(t, b)| Op::SetMargins(Margins::from_triple(t + b, b, b))),
        prop_oneof![
            Just(Maximization::None),
            Just(Maximization::Vertical),
            Just(Maximization::Horizontal),
            Just(Maximization::Full),
        ]
        .prop_map(Op::SetMaximization),
        any::<bool>().prop_map(Op::SetFullscreen),
        any::<bool>().prop_map(Op::Map),
        Just(Op::Commit),
        (0usize..3).prop_map(Op::AckObedient),
        (1i32..3_000, 1i32..3_000).prop_map(|(w, h)| Op::AckDisobedient(Dimensions::new(w, h))),
    ]
}

fn apply(
    toplevel: &mut Toplevel,
    commits: &mut Vec<Commit>,
    op: &Op,
) -> Result<(), TestCaseError> {
    match op {
        Op::SetGeometry(g) => toplevel.pending_mut().geometry = *g,
        Op::SetGravity(e) => toplevel.pending_mut().gravity = *e,
        Op::SetMargins(m) => toplevel.pending_mut().margins = *m,
        Op::SetMaximization(m) => toplevel.pending_mut().set_maximization(*m),
        Op::SetFullscreen(f) => toplevel.pending_mut().fullscreen = *f,
        Op::Map(true) => toplevel.map(),
        Op::Map(false) => toplevel.unmap(),
        Op::Commit => {
            let before = *toplevel.current();
            let pending = *toplevel.pending();
            let commit = toplevel.commit();
            prop_assert_eq!(commit.state, pending);
            prop_assert_eq!(*toplevel.committed(), pending);
            prop_assert_eq!(*toplevel.current(), before);
            if let Some(last) = commits.last() {
                prop_assert!(commit.serial > last.serial);
            }
            commits.push(commit);
        }
        Op::AckObedient(age) => {
            let Some(commit) = commits.iter().rev().nth(*age).copied() else {
                return Ok(());
            };
            let before = *toplevel.current();
            let was_outstanding = toplevel.has_outstanding_commit();
            let is_latest = *age == 0;
            let outcome = toplevel.acknowledge(commit.serial, commit.client_size());
            if is_latest && was_outstanding {
                prop_assert_eq!(outcome, AckOutcome::Applied);
                prop_assert_eq!(toplevel.current(), toplevel.committed());
            } else {
                prop_assert_eq!(outcome, AckOutcome::Stale);
                prop_assert_eq!(*toplevel.current(), before);
            }
        }
        Op::AckDisobedient(size) => {
            let Some(commit) = commits.last().copied() else {
                return Ok(());
            };
            if !toplevel.has_outstanding_commit() {
                return Ok(());
            }
            let requested = commit.state.geometry;
            let gravity = commit.state.gravity;
            prop_assert_eq!(
                toplevel.acknowledge(commit.serial, *size),
                AckOutcome::Applied
            );
            let actual = toplevel.current().geometry;
            let frame = size.expand_by_margins(&commit.state.margins);
            prop_assert_eq!(actual.dimensions(), frame);
            if gravity.contains(Edges::RIGHT) {
                prop_assert_eq!(actual.right(), requested.right());
            } else {
                prop_assert_eq!(actual.x, requested.x);
            }
            if gravity.contains(Edges::BOTTOM) {
                prop_assert_eq!(actual.bottom(), requested.bottom());
            } else {
                prop_assert_eq!(actual.y, requested.y);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn pipeline_invariants_hold(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut toplevel = Toplevel::default();
        let mut commits = Vec::new();
        for op in &ops {
            apply(&mut toplevel, &mut commits, op)?;
        }
    }

    #[test]
    fn commit_then_obedient_ack_converges(ops in proptest::collection::vec(op_strategy(), 0..30)) {
        let mut toplevel = Toplevel::default();
        let mut commits = Vec::new();
        for op in &ops {
            apply(&mut toplevel, &mut commits, op)?;
        }
        let commit = toplevel.commit();
        prop_assert_eq!(
            toplevel.acknowledge(commit.serial, commit.client_size()),
            AckOutcome::Applied
        );
        prop_assert_eq!(toplevel.current(), toplevel.pending());
        prop_assert!(!toplevel.has_outstanding_commit());
    }
}
