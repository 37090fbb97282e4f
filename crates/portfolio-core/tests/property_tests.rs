//! Property-based tests for the tab set, lightbox and scroll lock
//!
//! Uses proptest to check the invariants that must hold after any sequence
//! of user interactions.

use portfolio_core::{
    Lightbox, LightboxImage, LockHolder, ResolvedProject, ResolvedSection, ScrollLock, TabSet,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a project with 1..8 uniquely identified sections
fn project_strategy() -> impl Strategy<Value = ResolvedProject> {
    (1..8usize).prop_map(|n| {
        let sections = (0..n)
            .map(|i| {
                ResolvedSection::loaded(format!("s{}", i), format!("Section {}", i), "<p></p>")
            })
            .collect();
        ResolvedProject::new(sections, Vec::new())
    })
}

fn images(n: usize) -> Vec<LightboxImage> {
    (0..n)
        .map(|i| LightboxImage::new(format!("{}.png", i), String::new()))
        .collect()
}

/// Lock operations: (acquire?, holder)
fn lock_ops_strategy() -> impl Strategy<Value = Vec<(bool, bool)>> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 0..40)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly one tab is active after any sequence of switches, including
    /// switches to ids that do not exist
    #[test]
    fn exactly_one_tab_active(
        project in project_strategy(),
        switches in prop::collection::vec(0..12usize, 0..30),
    ) {
        let mut tabs = TabSet::from_project(&project);
        prop_assert_eq!(tabs.len(), project.sections().len());

        for target in switches {
            let id = format!("s{}", target);
            let before = tabs.active_index();
            let result = tabs.switch_to(&id);

            if target < tabs.len() {
                prop_assert_eq!(tabs.active_index(), target);
                prop_assert!(result.is_some());
            } else {
                prop_assert_eq!(tabs.active_index(), before);
                prop_assert!(result.is_none());
            }

            let active = (0..tabs.len()).filter(|i| tabs.is_active(*i)).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// next() applied N times on an N-image sequence returns to the start
    #[test]
    fn lightbox_next_is_cyclic(n in 2..20usize, start in 0..20usize) {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        lb.open(images(n), start, &mut lock).unwrap();
        let origin = lb.index();

        for _ in 0..n {
            lb.next();
            prop_assert!(lb.index() < n);
        }
        prop_assert_eq!(lb.index(), origin);
    }

    /// prev() undoes next()
    #[test]
    fn lightbox_prev_inverts_next(n in 1..20usize, steps in 0..50usize) {
        let mut lock = ScrollLock::new();
        let mut lb = Lightbox::new();
        lb.open(images(n), 0, &mut lock).unwrap();

        for _ in 0..steps {
            lb.next();
        }
        for _ in 0..steps {
            lb.prev();
        }
        prop_assert_eq!(lb.index(), 0);
    }

    /// The lock is held exactly when some holder has an outstanding claim
    #[test]
    fn scroll_lock_tracks_holders(ops in lock_ops_strategy()) {
        let mut lock = ScrollLock::new();
        let mut modal = false;
        let mut lightbox = false;

        for (acquire, is_modal) in ops {
            let holder = if is_modal {
                LockHolder::Modal
            } else {
                LockHolder::Lightbox
            };
            if acquire {
                lock.acquire(holder);
            } else {
                lock.release(holder);
            }
            if is_modal {
                modal = acquire
            } else {
                lightbox = acquire
            }

            prop_assert_eq!(lock.is_locked(), modal || lightbox);
        }
    }
}
