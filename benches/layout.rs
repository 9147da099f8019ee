use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use venn_layout::config::LayoutConfig;
use venn_layout::ir::{Group, Member, VennData};
use venn_layout::layout::{Point, build_model, distributed_points, smallest_enclosing_circle};
use venn_layout::render::render_svg;
use venn_layout::surface::TextSurface;
use venn_layout::theme::Theme;
use venn_layout::RenderConfig;

/// `members` members spread over every non-empty subset of `groups` groups.
fn synthetic_data(groups: usize, members: usize) -> VennData {
    let mut data = VennData::new();
    for g in 0..groups {
        data.groups.push(Group::new(format!("g{}", g)));
    }
    let subsets = (1usize << groups) - 1;
    for i in 0..members {
        let mask = i % subsets + 1;
        let ids: Vec<String> = (0..groups)
            .filter(|&g| mask & (1usize << g) != 0)
            .map(|g| format!("g{}", g))
            .collect();
        data.members.push(Member::new(format!("m{}", i), ids));
    }
    data
}

fn fast_config() -> LayoutConfig {
    LayoutConfig {
        fast_text_metrics: true,
        ..Default::default()
    }
}

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunflower");
    for n in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(distributed_points(black_box(n), 0.0, 250.0)));
        });
    }
    group.finish();
}

fn bench_enclosing_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("enclosing_circle");
    for n in [16usize, 128, 1024] {
        let points: Vec<Point> = distributed_points(n, 1.0, 250.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| black_box(smallest_enclosing_circle(black_box(points))));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::classic();
    let config = fast_config();
    for (groups, members) in [(2usize, 10usize), (3, 40), (5, 200)] {
        let name = format!("{}x{}", groups, members);
        let data = synthetic_data(groups, members);
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let mut surface = TextSurface::new(&theme, true);
                let model = build_model(black_box(data), &mut surface, &config).expect("layout failed");
                black_box(model.circles.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::classic();
    let config = fast_config();
    let render = RenderConfig::default();
    let data = synthetic_data(4, 60);
    group.bench_function("4x60", |b| {
        b.iter(|| {
            let mut surface = TextSurface::new(&theme, true);
            let model = build_model(black_box(&data), &mut surface, &config).expect("layout failed");
            black_box(render_svg(&model, &surface, &theme, &render).len());
        });
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_distribution, bench_enclosing_circle, bench_layout, bench_end_to_end
);
criterion_main!(benches);
