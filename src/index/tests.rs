use super::*;

#[test]
fn test_insert_keeps_order() {
    let mut index = MasterChannelIndex::new();
    let time = MasterName::from("time");
    let angle = MasterName::from("angle");

    index.insert(&time, "time".to_string());
    index.insert(&angle, "crank".to_string());
    index.insert(&time, "speed".to_string());

    assert_eq!(index.len(), 2);
    assert_eq!(index.channels(&time).unwrap(), ["time", "speed"]);
    assert_eq!(index.channels(&angle).unwrap(), ["crank"]);
    assert_eq!(index.masters().collect::<Vec<_>>(), vec![&time, &angle]);
    assert_eq!(
        index.channel_names().collect::<Vec<_>>(),
        vec!["time", "speed", "crank"]
    );
    assert_eq!(index.channel_count(), 3);
}

#[test]
fn test_unmastered_entry() {
    let mut index = MasterChannelIndex::new();
    index.insert(&MasterName::Unmastered, "counter".to_string());

    assert!(index.contains_master(&MasterName::Unmastered));
    assert_eq!(index.channels(&MasterName::Unmastered).unwrap(), ["counter"]);
}

#[test]
fn test_remove_keeps_empty_entry() {
    let mut index = MasterChannelIndex::new();
    let time = MasterName::from("time");
    index.insert(&time, "speed".to_string());

    assert!(index.remove(&time, "speed"));
    assert!(index.contains_master(&time));
    assert_eq!(index.channels(&time).unwrap().len(), 0);
    assert_eq!(index.channel_count(), 0);
    assert!(!index.is_empty());
}

#[test]
fn test_remove_reports_inconsistency() {
    let mut index = MasterChannelIndex::new();
    let time = MasterName::from("time");
    index.insert(&time, "speed".to_string());

    assert!(!index.remove(&MasterName::from("angle"), "speed"));
    assert!(!index.remove(&time, "rpm"));
    assert_eq!(index.channels(&time).unwrap(), ["speed"]);
}

#[test]
fn test_unknown_master() {
    let index = MasterChannelIndex::new();
    assert_eq!(index.channels(&MasterName::from("time")), None);
    assert!(index.is_empty());
}
