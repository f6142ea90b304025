use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use thruster_lib::{generate, DeviceConfig, GasTable, SweepConfig};

static CONFIG: Lazy<SweepConfig> = Lazy::new(SweepConfig::default);
static GASES: Lazy<GasTable> = Lazy::new(GasTable::builtin);
static DEVICES: Lazy<Vec<DeviceConfig>> =
    Lazy::new(|| CONFIG.devices().expect("default configuration is valid"));

fn benchmark_sweeps(c: &mut Criterion) {
    let table = &*GASES;

    for device in DEVICES.iter() {
        let name = format!("default_{}_sweep", device.family().slug());
        c.bench_function(&name, |b| {
            b.iter(|| {
                let result = generate(device, &CONFIG.gases, table).expect("sweep succeeds");
                black_box(result.len())
            });
        });
    }
}

criterion_group!(benches, benchmark_sweeps);
criterion_main!(benches);
