use criterion::{black_box, criterion_group, criterion_main, Criterion};
use presets::{terrain, Catalog, Kind};
use schema::{Patch, Variables};

fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::new().expect("catalog");
    let vars = Variables::new();

    c.bench_function("resolve_locomotion_randomized_terrain", |b| {
        b.iter(|| catalog.terrain.resolve(black_box(terrain::LOCOMOTION_RANDOMIZED)));
    });

    c.bench_function("resolve_locomotion_task", |b| {
        b.iter(|| catalog.task.resolve(black_box("locomotion")));
    });

    let mut cli = Patch::new();
    cli.assign("terrain.num_rows=4").expect("assignment");
    cli.assign("domain_rand.friction_range=[0.2,1.0]").expect("assignment");
    c.bench_function("resolve_task_json_with_cli_patch", |b| {
        b.iter(|| catalog.resolve_json(Kind::Task, black_box("amp"), std::slice::from_ref(&cli), &vars));
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
