use common::shapes::{Aabb, Vec2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use spatial::{Grid, GridAddress, QuadTree, TreeAddress};

const WORLD: Aabb = Aabb::new(0.0, 0.0, 1000.0, 1000.0);
const ENTITIES: u32 = 2000;

fn filled_grid(rng: &mut ThreadRng) -> (Grid, Vec<(Vec2, GridAddress)>) {
    let mut grid = Grid::new(50, 50, Vec2::splat(20.0)).unwrap();
    let entries = (0..ENTITIES)
        .map(|id| {
            let pos = WORLD.random_point_inside(rng);
            (pos, grid.insert(pos, id, id % 4))
        })
        .collect();
    (grid, entries)
}

fn filled_tree(rng: &mut ThreadRng) -> (QuadTree, Vec<(Aabb, TreeAddress)>) {
    let mut qt = QuadTree::new(WORLD, 16, 8).unwrap();
    let entries = (0..ENTITIES)
        .map(|id| {
            let bounds = WORLD.random_square_inside(rng.gen_range(1.0..10.0), rng);
            (bounds, qt.insert(bounds, id, id % 4))
        })
        .collect();
    (qt, entries)
}

fn grid_insert_remove_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (mut grid, _) = filled_grid(&mut rng);

    c.bench_function("grid_insert_remove", |b| {
        b.iter(|| {
            let pos = WORLD.random_point_inside(&mut rng);
            let address = grid.insert(black_box(pos), ENTITIES, 0);
            grid.remove(address, ENTITIES, 0);
        })
    });
}

fn grid_update_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (mut grid, mut entries) = filled_grid(&mut rng);

    c.bench_function("grid_update", |b| {
        b.iter(|| {
            for (id, (pos, address)) in entries.iter_mut().enumerate() {
                let delta = Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
                *pos = pos.add(delta).max(WORLD.min).min(WORLD.max);
                grid.update(address, black_box(*pos), id as u32, id as u32 % 4);
            }
        })
    });
}

fn grid_query_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (grid, _) = filled_grid(&mut rng);
    let area = Aabb::new(400.0, 400.0, 600.0, 600.0);
    let mut out = Vec::new();

    c.bench_function("grid_query", |b| {
        b.iter(|| {
            out.clear();
            grid.query(black_box(area), 1, false, &mut out);
        })
    });
}

fn tree_insert_remove_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (mut qt, _) = filled_tree(&mut rng);

    c.bench_function("quadtree_insert_remove", |b| {
        b.iter(|| {
            let bounds = WORLD.random_square_inside(5.0, &mut rng);
            let address = qt.insert(black_box(bounds), ENTITIES, 0);
            qt.remove(address, ENTITIES, 0);
        })
    });
}

fn tree_update_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (mut qt, mut entries) = filled_tree(&mut rng);

    c.bench_function("quadtree_update", |b| {
        b.iter(|| {
            for (id, (bounds, address)) in entries.iter_mut().enumerate() {
                let delta = Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
                let next = bounds.moved(delta);
                if next.fits(&WORLD) {
                    *bounds = next;
                }
                qt.update(address, black_box(*bounds), id as u32, id as u32 % 4);
            }
        })
    });
}

fn tree_query_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (qt, _) = filled_tree(&mut rng);
    let area = Aabb::new(400.0, 400.0, 600.0, 600.0);
    let (mut frontier, mut temp, mut out) = (Vec::new(), Vec::new(), Vec::new());

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            out.clear();
            qt.query(1, false, black_box(area), &mut frontier, &mut temp, &mut out);
        })
    });
}

criterion_group!(
    spatial_benchmarks,
    grid_insert_remove_benchmark,
    grid_update_benchmark,
    grid_query_benchmark,
    tree_insert_remove_benchmark,
    tree_update_benchmark,
    tree_query_benchmark
);
criterion_main!(spatial_benchmarks);
