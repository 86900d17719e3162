use log::trace;

use crate::{
    subobjects::{replication_flags::ReplicationFlags, subobject_slot::Subobjects},
    SubobjectChannel,
};

/// Replicates every valid subobject reachable from `node` on one connection's
/// channel, parents before their own children, slots in declaration order and
/// collections in collection order. Empty slots and subobjects that are
/// tearing down are skipped. The same channel, bunch and flags are used all
/// the way down.
///
/// Returns true iff anything was written for this connection.
pub fn replicate_subobjects<S, C>(
    node: &S,
    channel: &mut C,
    bunch: &mut C::Bunch,
    flags: &ReplicationFlags,
) -> bool
where
    S: Subobjects + ?Sized,
    C: SubobjectChannel + ?Sized,
{
    let mut wrote_something = false;

    for slot in node.subobjects() {
        for entry in slot.into_entries() {
            let Some(child) = entry else {
                continue;
            };
            let replicant = child.replicant();
            if !replicant.is_valid() {
                trace!(
                    "Replicant `{}`: skipped, lifecycle is {:?}",
                    replicant.name(),
                    replicant.lifecycle()
                );
                continue;
            }

            wrote_something |= channel.replicate_child_state(bunch, flags, child);
            wrote_something |= replicate_subobjects(child, channel, bunch, flags);
        }
    }

    wrote_something
}
