// benches/ray_cast.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use star_seeker::Tuning;
use star_seeker::sim::{Boundary, Canvas, Emitter, Scene, edge_boundaries};

fn wall_set(canvas: &Canvas, random_walls: usize, rng: &mut Pcg32) -> Vec<Boundary> {
    let mut walls: Vec<Boundary> = (0..random_walls).map(|_| Boundary::random(canvas, rng)).collect();
    walls.extend(edge_boundaries(canvas, rng));
    walls
}

fn ray_cast_benchmark_fn(c: &mut Criterion) {
    let canvas = Canvas::new(1280.0, 720.0).unwrap();
    let mut rng = Pcg32::seed_from_u64(7);

    let mut group = c.benchmark_group("RayCast");

    // Level 1 and level 3 wall counts, plus a heavier layout
    for random_walls in [5usize, 9, 40] {
        let walls = wall_set(&canvas, random_walls, &mut rng);
        let mut emitter = Emitter::new(canvas.center(), 1.0).unwrap();
        let origins: Vec<Vec2> = (0..64).map(|_| canvas.random_point(&mut rng)).collect();
        let mut origin_iter = origins.iter().cycle();

        group.bench_function(format!("refresh_360_rays_{}_walls", walls.len()), |b| {
            b.iter(|| {
                emitter.set_origin(*origin_iter.next().unwrap());
                emitter.refresh(black_box(&walls)).unwrap();
            })
        });
    }

    group.bench_function("scene_frame_level_3", |b| {
        let mut scene = Scene::start(3, canvas, &Tuning::default(), 11).unwrap();
        b.iter(|| {
            let pointer = Vec2::new(rng.random_range(0.0..1280.0), rng.random_range(0.0..720.0));
            let view = scene.frame(black_box(pointer), 1.0).unwrap();
            black_box(view.target.visible);
        })
    });

    group.finish();
}

criterion_group!(benches, ray_cast_benchmark_fn);
criterion_main!(benches);
