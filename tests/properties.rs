//! Property-based tests for the channel store invariants

use std::collections::HashSet;

use mdfstore::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// One store operation a reader or converter might issue
#[derive(Debug, Clone)]
enum Op {
    Add {
        group: usize,
        name: String,
        master: Option<String>,
        len: usize,
    },
    Remove(String),
    Remaster {
        name: String,
        master: Option<String>,
    },
}

fn channel_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["t", "T", "rpm", "speed", "t_1", "rpm_2"]).prop_map(String::from)
}

fn master_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["t", "time", "angle"]).prop_map(String::from))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..4, channel_name(), master_name(), 0usize..5).prop_map(
            |(group, name, master, len)| Op::Add { group, name, master, len }
        ),
        1 => channel_name().prop_map(Op::Remove),
        1 => (channel_name(), master_name())
            .prop_map(|(name, master)| Op::Remaster { name, master }),
    ]
}

fn apply(store: &mut ChannelStore, op: &Op) {
    match op {
        Op::Add {
            group,
            name,
            master,
            len,
        } => {
            let data: Vec<f64> = (0..*len).map(|i| i as f64).collect();
            store
                .add_channel(*group, name, NewChannel::new(data, master.clone()))
                .unwrap();
        }
        Op::Remove(name) => {
            let known = store.contains(name);
            assert_eq!(store.remove_channel(name).is_ok(), known);
        }
        Op::Remaster { name, master } => {
            let known = store.contains(name);
            assert_eq!(store.set_channel_master(name, master.clone()).is_ok(), known);
        }
    }
}

fn indexed_names(store: &ChannelStore) -> Vec<String> {
    store
        .master_channel_index()
        .channel_names()
        .map(String::from)
        .collect()
}

fn metadata() -> impl Strategy<Value = FileMetadata> {
    (
        "[a-zA-Z ]{0,12}",
        "[a-zA-Z ]{0,12}",
        "[a-zA-Z ]{0,12}",
        "[0-9:]{0,10}",
    )
        .prop_map(|(author, project, comment, date)| FileMetadata {
            author,
            project,
            comment,
            date,
            ..Default::default()
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn test_keys_unique_and_nothing_overwritten(
        adds in prop::collection::vec((0usize..4, channel_name()), 1..40)
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(410));
        let mut keys = HashSet::new();
        for (i, (group, name)) in adds.iter().enumerate() {
            let key = store
                .add_channel(*group, name, NewChannel::new(vec![i as f64], "t"))
                .unwrap();
            prop_assert!(keys.insert(key.clone()));
            if key != *name {
                let prefix = format!("{name}_{group}");
                prop_assert!(key.starts_with(&prefix));
            }
        }
        prop_assert_eq!(store.len(), adds.len());

        // Every add kept its own samples
        for key in &keys {
            prop_assert!(store.get_channel_data(key).is_some());
        }
    }

    #[test]
    fn test_index_matches_records(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = ChannelStore::new(StoreConfig::for_version(410));
        for op in &ops {
            apply(&mut store, op);
            prop_assert!(store.check_consistency().is_ok());
        }

        let indexed = indexed_names(&store);
        let unique: HashSet<&str> = indexed.iter().map(String::as_str).collect();
        let stored: HashSet<&str> = store.channel_names().collect();
        prop_assert_eq!(unique.len(), indexed.len());
        prop_assert_eq!(unique, stored);
    }

    #[test]
    fn test_legacy_forces_time_master(
        version in 0u16..400,
        code in 0u8..5,
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(version));
        let master_type = MasterType::from_code(code).unwrap();
        store
            .add_channel(0, "x", NewChannel::new(vec![0.0], "t").master_type(master_type))
            .unwrap();
        prop_assert_eq!(store.get_channel_master_type("x"), Some(MasterType::Time));
    }

    #[test]
    fn test_modern_keeps_master_type(
        version in 400u16..=u16::MAX,
        code in 0u8..5,
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(version));
        let master_type = MasterType::from_code(code).unwrap();
        store
            .add_channel(0, "x", NewChannel::new(vec![0.0], "t").master_type(master_type))
            .unwrap();
        prop_assert_eq!(store.get_channel_master_type("x"), Some(master_type));
    }

    #[test]
    fn test_identity_conversion_elided(
        version in 0u16..400,
        p1_negative_zero in any::<bool>(),
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(version));
        let p1 = if p1_negative_zero { -0.0 } else { 0.0 };
        let identity = ConversionSource::new(0)
            .with_parameter("P1", p1)
            .with_parameter("P2", 1.0);
        store
            .add_channel(0, "x", NewChannel::new(vec![1i16], "t").conversion(identity))
            .unwrap();
        prop_assert!(store.get_channel_conversion("x").is_absent());
    }

    #[test]
    fn test_non_identity_linear_kept(
        p1 in -1e6f64..1e6,
        p2 in -1e6f64..1e6,
    ) {
        prop_assume!(!(p1 == 0.0 && p2 == 1.0));
        let mut store = ChannelStore::new(StoreConfig::for_version(330));
        let linear = ConversionSource::new(0)
            .with_parameter("P1", p1)
            .with_parameter("P2", p2);
        store
            .add_channel(0, "x", NewChannel::new(vec![1i16], "t").conversion(linear))
            .unwrap();
        prop_assert!(store.get_channel_conversion("x").present().is_some());
    }

    #[test]
    fn test_setters_on_unknown_channel_fail(
        stored in prop::collection::hash_set("[a-z]{1,6}", 0..8),
        probe in "[A-Z]{1,6}",
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(410));
        for name in &stored {
            store.add_channel(0, name, NewChannel::new(vec![0.0], "t")).unwrap();
        }
        let before = indexed_names(&store);

        let results = [
            store.set_channel_unit(&probe, "V"),
            store.set_channel_desc(&probe, "d"),
            store.set_channel_data(&probe, vec![1.0]),
            store.set_channel_master(&probe, "t"),
            store.set_channel_master_type(&probe, MasterType::Angle),
            store.set_channel_attachment(&probe, Attachment::new("a")),
            store.set_channel_conversion(&probe, Conversion::Modern(ModernConversion::new(1))),
        ];
        for result in results {
            prop_assert!(matches!(result, Err(StoreError::NotFound(name)) if name == probe));
        }
        prop_assert_eq!(indexed_names(&store), before);
    }

    #[test]
    fn test_removal_round_trip(
        names in prop::collection::vec(channel_name(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = ChannelStore::new(StoreConfig::for_version(410));
        let keys: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(group, name)| {
                store
                    .add_channel(group, name, NewChannel::new(vec![0.0], "t"))
                    .unwrap()
            })
            .collect();
        let target = pick.get(&keys);

        prop_assert!(store.remove_channel(target).is_ok());
        prop_assert!(store.get_channel(target).is_none());
        prop_assert!(!indexed_names(&store).contains(target));
        prop_assert_eq!(store.len(), keys.len() - 1);
    }

    #[test]
    fn test_add_metadata_idempotent(first in metadata(), second in metadata()) {
        let mut once = ChannelStore::default();
        once.add_metadata(first.clone());
        once.add_metadata(second.clone());

        let mut twice = ChannelStore::default();
        twice.add_metadata(first);
        twice.add_metadata(second.clone());
        twice.add_metadata(second.clone());

        prop_assert_eq!(once.file_metadata(), twice.file_metadata());
        prop_assert_eq!(once.file_metadata(), second);
    }
}
