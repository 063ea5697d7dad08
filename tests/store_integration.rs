//! Integration tests for mdfstore
//!
//! These tests drive the store the way a format reader and a downstream
//! exporter would: fill it, query it, copy it, render it.

use mdfstore::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fill a store the way a reader walks data groups
fn read_two_groups(version: u16) -> ChannelStore {
    let mut store = ChannelStore::new(
        StoreConfig::for_version(version)
            .with_file_name("engine_run.mdf")
            .with_tabular(false),
    );
    store.add_metadata(FileMetadata {
        author: "test bench 3".to_string(),
        organisation: "powertrain".to_string(),
        project: "calibration".to_string(),
        subject: "engine".to_string(),
        comment: "cold start".to_string(),
        date: "14:03:2019".to_string(),
        time: "08:15:42".to_string(),
    });

    // Data group 0: 10 ms raster
    let time: Vec<f64> = (0..5).map(|i| f64::from(i) * 0.01).collect();
    store
        .add_channel(0, "time", NewChannel::new(time, "time").unit("s"))
        .unwrap();
    store
        .add_channel(
            0,
            "n_eng",
            NewChannel::new(vec![800u16, 810, 820, 830, 840], "time")
                .unit("rpm")
                .description("engine speed")
                .conversion(
                    ConversionSource::new(0)
                        .with_parameter("P1", 0.0)
                        .with_parameter("P2", 0.25),
                ),
        )
        .unwrap();

    // Data group 1: 100 ms raster, its master is also called "time"
    store
        .add_channel(1, "time", NewChannel::new(vec![0.0, 0.1], "time_1").unit("s"))
        .unwrap();
    store
        .add_channel(
            1,
            "t_oil",
            NewChannel::new(vec![20.5f32, 20.75], "time_1").unit("degC"),
        )
        .unwrap();
    store
}

#[test]
fn test_reader_workflow() {
    init_logging();
    let store = read_two_groups(310);

    assert_eq!(store.len(), 4);
    assert!(store.contains("time"));
    assert!(store.contains("time_1"));
    store.check_consistency().unwrap();

    let masters: Vec<String> = store.masters().map(|m| m.to_string()).collect();
    assert_eq!(masters, vec!["time", "time_1"]);
    assert_eq!(
        store.master_channels(&MasterName::from("time_1")).unwrap(),
        ["time_1", "t_oil"]
    );

    let conversion = store.get_channel_conversion("n_eng").present().unwrap();
    assert_eq!(conversion.schema(), ConversionSchema::Legacy);
    assert_eq!(store.get_channel_unit("t_oil").as_deref(), Some("degC"));
    assert_eq!(
        store.file_metadata().recorded_at().unwrap().to_string(),
        "2019-03-14 08:15:42"
    );
}

#[test]
fn test_tabular_export() {
    init_logging();
    let mut store = read_two_groups(410);
    store.set_tabular(true);

    let groups = store.tabular_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].column_names(), vec!["time", "n_eng"]);
    assert_eq!(groups[0].num_rows(), 5);
    assert_eq!(groups[1].column_names(), vec!["time_1", "t_oil"]);
    assert_eq!(groups[1].num_rows(), 2);

    let text = store.to_string();
    assert!(text.starts_with("file name : engine_run.mdf\n"));
    assert!(text.contains("comment : cold start\n"));
    assert!(text.contains("[5 rows x 2 columns]"));
}

#[test]
fn test_copy_then_diverge() {
    init_logging();
    let original = read_two_groups(410);

    let mut shallow = original.copy();
    shallow.set_channel_desc("t_oil", "oil temperature").unwrap();
    assert_eq!(
        original.get_channel_desc("t_oil").as_deref(),
        Some("oil temperature")
    );

    let mut deep = original.deep_copy();
    deep.remove_channel("n_eng").unwrap();
    deep.set_channel_unit("t_oil", "K").unwrap();
    assert!(original.contains("n_eng"));
    assert_eq!(original.get_channel_unit("t_oil").as_deref(), Some("degC"));

    original.check_consistency().unwrap();
    shallow.check_consistency().unwrap();
    deep.check_consistency().unwrap();
}

#[test]
fn test_handles_cannot_regroup_channels() {
    init_logging();
    let mut store = read_two_groups(410);

    for partition in store.master_partitions() {
        for (_, channel) in &partition.channels {
            let mut record = channel.write();
            *record.master_type_mut() = MasterType::Index;
            record.unit_mut().push_str(" (raw)");
        }
    }
    store.check_consistency().unwrap();
    assert_eq!(store.get_channel_unit("t_oil").as_deref(), Some("degC (raw)"));
    assert_eq!(
        store.get_channel_master("t_oil"),
        Some(MasterName::from("time_1"))
    );

    store.set_channel_master("t_oil", "time").unwrap();
    store.check_consistency().unwrap();
    assert_eq!(
        store.master_channels(&MasterName::from("time")).unwrap(),
        ["time", "n_eng", "t_oil"]
    );
    store.remove_channel("t_oil").unwrap();
    store.check_consistency().unwrap();
}

#[test]
fn test_settings_file_builds_store() {
    init_logging();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[store]\nversion = 420\ntabular = true\nchannel_list = [\"rpm\"]\n\n[render]\nmax_rows = 4"
    )
    .unwrap();

    let settings = StoreSettings::from_file(file.path()).unwrap();
    let mut store = settings.build_store();
    assert_eq!(store.schema(), ConversionSchema::Modern);
    assert!(store.wants_channel("rpm"));
    assert!(!store.wants_channel("lambda"));

    store
        .add_channel(0, "rpm", NewChannel::new(vec![1i32; 10], "rpm"))
        .unwrap();
    let text = store.render(&settings.render);
    assert!(text.contains("[10 rows x 1 columns]"));
    // 2 head rows, ellipsis, 2 tail rows
    assert_eq!(text.matches("  1").count(), 4);
}

#[test]
fn test_metadata_json_roundtrip_through_store() {
    let store = read_two_groups(300);
    let json = store.file_metadata().to_json().unwrap();
    let restored = FileMetadata::from_json(&json).unwrap();

    let mut other = ChannelStore::default();
    other.add_metadata(restored);
    assert_eq!(other.file_metadata(), store.file_metadata());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_groups_match_sequential() {
    let mut store = read_two_groups(410);
    let sequential = store.map_master_groups(|group| group.len());

    store.set_multi_proc(true);
    let parallel = store.map_master_groups(|group| group.len());
    assert_eq!(sequential, parallel);
}
