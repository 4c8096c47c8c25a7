use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_animator::core::actions::render_frame::render_frame::render_frame;
use fractal_animator::core::actions::subdivide::subdivide::subrender;
use fractal_animator::core::data::camera::CameraView;
use fractal_animator::core::data::complex::Complex;
use fractal_animator::core::data::index_buffer::IndexBuffer;
use fractal_animator::core::data::pixel_rect::PixelRect;
use fractal_animator::core::data::point::Point;

const MAX_ITERATIONS: u32 = 127;
const SIDE: i32 = 256;

fn raster() -> PixelRect {
    PixelRect::new(
        Point { x: 0, y: 0 },
        Point {
            x: SIDE - 1,
            y: SIDE - 1,
        },
    )
    .unwrap()
}

fn whole_set_view() -> CameraView {
    CameraView::default()
}

/// Mostly-uniform view, where the boundary fill pays off.
fn wide_view() -> CameraView {
    CameraView {
        extent: Complex {
            real: 8.0,
            imag: 8.0,
        },
        center: Complex {
            real: -6.0,
            imag: 6.0,
        },
    }
}

fn bench_render_pipeline(c: &mut Criterion) {
    let raster = raster();
    let mut group = c.benchmark_group("render_pipeline");

    group.bench_function("brute_force_whole_set", |b| {
        b.iter(|| render_frame(black_box(raster), black_box(whole_set_view()), MAX_ITERATIONS))
    });

    group.bench_function("subdivision_whole_set", |b| {
        b.iter(|| {
            let mut buffer = IndexBuffer::new(raster);
            subrender(
                &mut buffer,
                black_box(whole_set_view()),
                MAX_ITERATIONS,
                raster.top_left(),
                raster.bottom_right(),
            )
            .unwrap();
            buffer
        })
    });

    group.bench_function("brute_force_wide_view", |b| {
        b.iter(|| render_frame(black_box(raster), black_box(wide_view()), MAX_ITERATIONS))
    });

    group.bench_function("subdivision_wide_view", |b| {
        b.iter(|| {
            let mut buffer = IndexBuffer::new(raster);
            subrender(
                &mut buffer,
                black_box(wide_view()),
                MAX_ITERATIONS,
                raster.top_left(),
                raster.bottom_right(),
            )
            .unwrap();
            buffer
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
