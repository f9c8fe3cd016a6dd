use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wildwest::{Assets, GameConfig, InputFrame, MapLayout, World};

fn demo_world() -> World {
    World::from_layout(&MapLayout::demo(), Assets::headless(), GameConfig::default())
        .expect("demo layout is valid")
}

fn bench_step(c: &mut Criterion) {
    let walk = InputFrame::new().with(InputFrame::FLAG_RIGHT);

    c.bench_function("world_step_walk", |b| {
        let mut world = demo_world();
        b.iter(|| {
            if world.phase() != wildwest::Phase::Playing {
                world = demo_world();
            }
            world.step(black_box(1.0 / 60.0), black_box(&walk))
        })
    });

    c.bench_function("world_step_120_frames_attacking", |b| {
        let attack = InputFrame::new().with(InputFrame::FLAG_ATTACK);
        b.iter(|| {
            let mut world = demo_world();
            for _ in 0..120 {
                world.step(1.0 / 60.0, &attack);
            }
            black_box(world.compute_hash())
        })
    });
}

fn bench_sprites(c: &mut Criterion) {
    let world = demo_world();
    c.bench_function("world_sprites", |b| b.iter(|| black_box(world.sprites())));
}

criterion_group!(benches, bench_step, bench_sprites);
criterion_main!(benches);
