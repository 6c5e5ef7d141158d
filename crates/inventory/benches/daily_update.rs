use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{Inventory, Item, ResetBaselines, update_quality};

const NAMES: [&str; 6] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Elixir of the Mongoose",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
];

fn stock(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            Item::new(name, (i % 30) as i32 - 5, (i % 51) as i32)
        })
        .collect()
}

fn bench_update_quality(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quality");
    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut items = stock(size);
            b.iter(|| update_quality(black_box(&mut items)));
        });
    }
    group.finish();
}

fn bench_simulated_month(c: &mut Criterion) {
    let baselines = ResetBaselines::classic_inventory();
    c.bench_function("inventory_advance_30_days", |b| {
        let mut inventory = Inventory::new(stock(1_000));
        b.iter(|| {
            inventory.advance(black_box(30));
            inventory.reset(&baselines);
        });
    });
}

criterion_group!(benches, bench_update_quality, bench_simulated_month);
criterion_main!(benches);
