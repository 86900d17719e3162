/// Integration tests for the recursive subobject replication pass
///
/// One pass serves one connection: every valid subobject reachable from the
/// Root is handed to the channel once, parents before their own children.

use replicant_shared::{
    begin_destroy, replicate_subobjects, ConnectionKey, ReplicationFlags, RootKey, WorldId,
};
use replicant_test::{TestBunch, TestChannel, TestReplicant, TestRoot};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn root_key() -> RootKey {
    RootKey::from_u64(1)
}

fn child(name: &str) -> TestReplicant {
    TestReplicant::new(name, Some(root_key()))
}

/// Root owns single slot `A`, `A` owns the collection `[B, C]`
fn tree() -> TestRoot {
    let mut root = TestRoot::authority(root_key(), WorldId::new(1));
    root.slot = Some(
        child("A")
            .with_item(Some(child("B")))
            .with_item(Some(child("C"))),
    );
    root
}

#[test]
fn every_subobject_is_visited_once_parent_first() {
    init_logging();
    let root = tree();
    let mut channel = TestChannel::new(ConnectionKey::new(1));
    let mut bunch = TestBunch::new();

    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());

    assert!(wrote);
    assert_eq!(channel.visits, vec!["A", "B", "C"]);
    assert_eq!(bunch.names(), vec!["A", "B", "C"]);
}

#[test]
fn empty_slots_are_skipped() {
    init_logging();
    let mut root = TestRoot::authority(root_key(), WorldId::new(1));
    root.slot = None;
    root.items = vec![None, Some(child("valid"))];
    let mut channel = TestChannel::new(ConnectionKey::new(1));

    let mut bunch = TestBunch::new();
    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());
    assert!(wrote);
    assert_eq!(channel.visits, vec!["valid"]);

    // nothing changed since the last pass
    let mut bunch = TestBunch::new();
    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::default());
    assert!(!wrote);
    assert!(bunch.records.is_empty());
    assert_eq!(channel.visit_count("valid"), 2);
}

#[test]
fn result_reflects_only_what_was_written() {
    init_logging();
    let mut root = tree();
    let mut channel = TestChannel::new(ConnectionKey::new(1));
    replicate_subobjects(&root, &mut channel, &mut TestBunch::new(), &ReplicationFlags::initial());

    // a change deep in the tree still makes the pass report a write
    root.find_mut("C").unwrap().health = 40;

    let mut bunch = TestBunch::new();
    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::default());

    assert!(wrote);
    assert_eq!(bunch.names(), vec!["C"]);
    assert_eq!(channel.visits.len(), 6);
}

#[test]
fn empty_root_writes_nothing() {
    init_logging();
    let root = TestRoot::authority(root_key(), WorldId::new(1));
    let mut channel = TestChannel::new(ConnectionKey::new(1));
    let mut bunch = TestBunch::new();

    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());

    assert!(!wrote);
    assert!(channel.visits.is_empty());
}

#[test]
fn children_of_a_silent_parent_are_still_walked() {
    init_logging();
    let root = tree();
    let mut channel = TestChannel::new(ConnectionKey::new(1));
    channel.mute("A");
    let mut bunch = TestBunch::new();

    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());

    assert!(wrote);
    assert_eq!(channel.visits, vec!["A", "B", "C"]);
    assert_eq!(bunch.names(), vec!["B", "C"]);
}

#[test]
fn torn_down_subtrees_are_skipped() {
    init_logging();
    let mut root = tree();
    root.items = vec![Some(child("D").with_inner(child("D.inner")))];

    assert!(begin_destroy(root.slot.as_mut().unwrap()));

    let mut channel = TestChannel::new(ConnectionKey::new(1));
    let mut bunch = TestBunch::new();
    let wrote = replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());

    assert!(wrote);
    assert_eq!(channel.visits, vec!["D", "D.inner"]);
}

#[test]
fn single_slots_nest_below_collections() {
    init_logging();
    let mut root = TestRoot::authority(root_key(), WorldId::new(1));
    root.items = vec![
        Some(child("first").with_inner(child("first.inner"))),
        None,
        Some(child("second")),
    ];
    let mut channel = TestChannel::new(ConnectionKey::new(1));
    let mut bunch = TestBunch::new();

    replicate_subobjects(&root, &mut channel, &mut bunch, &ReplicationFlags::initial());

    assert_eq!(channel.visits, vec!["first", "first.inner", "second"]);
}

#[test]
fn each_connection_gets_its_own_pass() {
    init_logging();
    let root = tree();
    let mut first = TestChannel::new(ConnectionKey::new(1));
    let mut second = TestChannel::new(ConnectionKey::new(2));

    assert!(replicate_subobjects(&root, &mut first, &mut TestBunch::new(), &ReplicationFlags::initial()));
    // what the first connection already received doesn't affect the second
    assert!(replicate_subobjects(&root, &mut second, &mut TestBunch::new(), &ReplicationFlags::default()));

    assert_eq!(first.visits, second.visits);
}
