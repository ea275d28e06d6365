use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ov16a1q::modes::tables;
use ov16a1q::regmap::{encode_write_frame, RegisterMap};
use ov16a1q::test_support::SimBus;

fn bench_encode_write_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_write_frame");
    for &len in &[1u16, 2u16, 3u16, 4u16] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                black_box(encode_write_frame(
                    black_box(0x3500),
                    black_box(len),
                    black_box(0x00ab_cdef),
                ))
            });
        });
    }
    group.finish();
}

fn bench_table_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_playback");
    for (name, table) in [
        ("common", tables::COMMON_REGS),
        ("mode_2304x1728", tables::MODE_2304X1728_4LANE_REGS),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &table, |b, table| {
            b.iter(|| {
                let mut map = RegisterMap::new(Box::new(SimBus::new()));
                map.play(black_box(table)).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode_write_frame, bench_table_playback);
criterion_main!(benches);
