use log::debug;

use crate::{subobjects::subobject_slot::Subobjects, ContextResolver, Replicant};

/// Where a replicant is between creation and destruction
///
/// `Created -> Live -> TearingDown -> Destroyed`, where `Live` is skipped by a
/// replicant that never resolved a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Created,
    Live,
    TearingDown,
    Destroyed,
}

impl LifecycleState {
    pub fn is_tearing_down(&self) -> bool {
        matches!(self, LifecycleState::TearingDown | LifecycleState::Destroyed)
    }
}

/// Runs the construction hook if the replicant hasn't begun play yet and its
/// world resolves. Returns whether the hook ran.
pub fn initialize(node: &mut dyn Replicant, resolver: &dyn ContextResolver) -> bool {
    let replicant = node.replicant();
    if replicant.lifecycle() != LifecycleState::Created {
        return false;
    }
    if replicant.world(resolver).is_none() {
        debug!(
            "Replicant `{}`: no world to begin play in yet",
            replicant.name()
        );
        return false;
    }

    node.replicant_mut().set_lifecycle(LifecycleState::Live);
    node.on_begin_play();
    true
}

/// Initializes every subobject below `node`, each one before its own
/// subobjects (so children created during `on_begin_play` are reached too).
/// Returns how many construction hooks ran.
pub fn initialize_subobjects<S: Subobjects + ?Sized>(
    node: &mut S,
    resolver: &dyn ContextResolver,
) -> usize {
    let mut initialized = 0;

    for slot in node.subobjects_mut() {
        for child in slot.into_entries().into_iter().flatten() {
            if !child.replicant().is_valid() {
                continue;
            }
            if initialize(&mut *child, resolver) {
                initialized += 1;
            }
            initialized += initialize_subobjects(&mut *child, resolver);
        }
    }

    initialized
}

/// Tears the replicant down: the teardown hook runs if (and only if) the
/// construction hook ran, then the replicant's own subobjects are torn down.
/// Does nothing for a replicant that's already tearing down. Returns whether
/// this call did the teardown.
pub fn begin_destroy(node: &mut dyn Replicant) -> bool {
    tear_down(node) > 0
}

/// Tears down every subobject below `node`. Returns how many were torn down
/// by this call.
pub fn destroy_subobjects<S: Subobjects + ?Sized>(node: &mut S) -> usize {
    let mut destroyed = 0;

    for slot in node.subobjects_mut() {
        for child in slot.into_entries().into_iter().flatten() {
            destroyed += tear_down(child);
        }
    }

    destroyed
}

fn tear_down(node: &mut dyn Replicant) -> usize {
    let replicant = node.replicant();
    if replicant.lifecycle().is_tearing_down() {
        return 0;
    }
    let began_play = replicant.has_begun_play();

    node.replicant_mut().set_lifecycle(LifecycleState::TearingDown);
    if began_play {
        node.on_end_play();
    }
    let destroyed_below = destroy_subobjects(&mut *node);
    node.replicant_mut().set_lifecycle(LifecycleState::Destroyed);

    1 + destroyed_below
}
