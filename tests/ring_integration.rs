use slotring::{HashRing, RingConfig, RingError};

#[test]
fn three_node_ring_lookup_and_removal() {
    let ring = HashRing::new(1024).expect("ring creation failed");

    for node in ["a", "b", "c"] {
        ring.add_node(node).expect("add failed");
    }

    let owner = ring.get_node("mydata").expect("lookup failed");
    assert!(["a", "b", "c"].contains(&owner.as_str()));

    ring.remove_node("b").expect("remove failed");

    for i in 0..2_000 {
        let owner = ring.get_node(&format!("item-{}", i)).expect("lookup failed");
        assert_ne!(owner, "b");
        assert!(!owner.is_empty());
    }
}

#[test]
fn empty_ring_rejects_everything() {
    let ring = HashRing::with_config(RingConfig::default()).expect("ring creation failed");

    assert_eq!(ring.remove_node("node1"), Err(RingError::EmptyRing));
    assert_eq!(ring.get_node("x"), Err(RingError::EmptyRing));
    assert_eq!(ring.add_node(""), Err(RingError::InvalidArgument("node name")));
    assert!(ring.is_empty());
}

#[test]
fn adding_a_node_only_moves_keys_onto_it() {
    let ring = HashRing::new(1 << 32).unwrap();
    for i in 0..5 {
        ring.add_node(&format!("server-{}", i)).unwrap();
    }

    let keys: Vec<String> = (0..10_000).map(|i| format!("key-{}", i)).collect();
    let before: Vec<String> = keys.iter().map(|k| ring.get_node(k).unwrap()).collect();

    ring.add_node("server-new").unwrap();
    let after: Vec<String> = keys.iter().map(|k| ring.get_node(k).unwrap()).collect();

    let mut moved = 0;
    for (b, a) in before.iter().zip(after.iter()) {
        if b != a {
            assert_eq!(a, "server-new", "key moved between two existing nodes");
            moved += 1;
        }
    }
    assert!(moved < keys.len(), "every key moved onto the new node");
}

#[test]
fn removing_a_node_only_moves_its_keys() {
    let ring = HashRing::new(1 << 32).unwrap();
    for i in 0..5 {
        ring.add_node(&format!("server-{}", i)).unwrap();
    }

    let keys: Vec<String> = (0..10_000).map(|i| format!("key-{}", i)).collect();
    let before: Vec<String> = keys.iter().map(|k| ring.get_node(k).unwrap()).collect();

    ring.remove_node("server-2").unwrap();

    for (key, b) in keys.iter().zip(before.iter()) {
        let a = ring.get_node(key).unwrap();
        if b != "server-2" {
            assert_eq!(&a, b, "key {} was not on the removed node but moved", key);
        }
    }
}

#[test]
fn re_adding_restores_previous_mapping() {
    let ring = HashRing::new(1024).unwrap();
    for node in ["alpha", "beta", "gamma", "delta"] {
        ring.add_node(node).unwrap();
    }
    let keys: Vec<String> = (0..500).map(|i| format!("k{}", i)).collect();
    let before: Vec<String> = keys.iter().map(|k| ring.get_node(k).unwrap()).collect();

    ring.remove_node("gamma").unwrap();
    ring.add_node("gamma").unwrap();

    let after: Vec<String> = keys.iter().map(|k| ring.get_node(k).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn nodes_listed_in_slot_order() {
    let ring = HashRing::new(1024).unwrap();
    for node in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        ring.add_node(node).unwrap();
    }

    let entries = ring.entries();
    let names: Vec<String> = entries.iter().map(|e| e.node.clone()).collect();
    assert_eq!(ring.nodes(), names);
    for entry in &entries {
        assert_eq!(entry.position, ring.slot_for(&entry.node));
        assert!(entry.position < ring.slot_space_size());
    }
}
