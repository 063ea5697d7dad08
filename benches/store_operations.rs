use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdfstore::prelude::*;

/// Create a store with `groups` master groups of `channels` channels each
fn create_test_store(groups: usize, channels: usize, samples: usize) -> ChannelStore {
    let mut store = ChannelStore::new(StoreConfig::for_version(410));
    for group in 0..groups {
        let master = format!("t{group}");
        let time: Vec<f64> = (0..samples).map(|i| i as f64 * 0.01).collect();
        store
            .add_channel(group, &master, NewChannel::new(time, master.as_str()))
            .unwrap();
        for channel in 0..channels {
            let data: Vec<f32> = (0..samples).map(|i| (i + channel) as f32).collect();
            store
                .add_channel(
                    group,
                    &format!("signal_{channel}"),
                    NewChannel::new(data, master.as_str()).unit("V"),
                )
                .unwrap();
        }
    }
    store
}

/// Benchmark filling a store, including collision renames
fn bench_add_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_channel");

    for groups in [1, 10, 50] {
        let channels = 20;
        group.throughput(Throughput::Elements((groups * (channels + 1)) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}groups", groups)),
            &groups,
            |b, &groups| {
                b.iter(|| black_box(create_test_store(groups, channels, 16)));
            },
        );
    }

    group.finish();
}

/// Benchmark field lookups by key
fn bench_lookup(c: &mut Criterion) {
    let store = create_test_store(50, 20, 16);
    let names: Vec<String> = store.channel_names().map(String::from).collect();

    c.bench_function("get_channel_unit", |b| {
        b.iter(|| {
            for name in &names {
                black_box(store.get_channel_unit(black_box(name)));
            }
        });
    });

    c.bench_function("master_channels", |b| {
        let masters: Vec<MasterName> = store.masters().cloned().collect();
        b.iter(|| {
            for master in &masters {
                black_box(store.master_channels(black_box(master)));
            }
        });
    });
}

/// Benchmark building the Arrow tables of the tabular view
fn bench_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular_groups");

    for samples in [100, 10_000] {
        let store = create_test_store(5, 20, samples);
        group.throughput(Throughput::Elements((5 * 21 * samples) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}samples", samples)),
            &store,
            |b, store| {
                b.iter(|| black_box(store.tabular_groups().unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add_channel, bench_lookup, bench_tabular);
criterion_main!(benches);
