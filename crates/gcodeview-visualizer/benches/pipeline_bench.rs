//! Criterion benchmarks for the import pipeline
//!
//! Covers: arc tessellation, path accumulation, normalization, and a full
//! text-to-display-path import.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gcodeview_core::{MotionEvent, MotionMode, Vector2};
use gcodeview_visualizer::{accumulate, normalize, ArcTessellator, GcodeImporter, GcodeReader};
use std::fmt::Write;

/// A pocket of concentric rounded rectangles, `loops` deep
fn generate_program(loops: usize) -> String {
    let mut program = String::from("; benchmark pocket\nG21 G90\nG0 X0 Y0\n");
    for i in 0..loops {
        let inset = i as f64 * 0.5;
        let (x0, y0) = (inset, inset);
        let (x1, y1) = (100.0 - inset, 60.0 - inset);
        let r = 5.0;
        let _ = writeln!(program, "G0 X{:.3} Y{:.3}", x0 + r, y0);
        let _ = writeln!(program, "G1 X{:.3}", x1 - r);
        let _ = writeln!(program, "G3 X{:.3} Y{:.3} I0 J{:.3}", x1, y0 + r, r);
        let _ = writeln!(program, "G1 Y{:.3}", y1 - r);
        let _ = writeln!(program, "G3 X{:.3} Y{:.3} I{:.3} J0", x1 - r, y1, -r);
        let _ = writeln!(program, "G1 X{:.3}", x0 + r);
        let _ = writeln!(program, "G3 X{:.3} Y{:.3} I0 J{:.3}", x0, y1 - r, -r);
        let _ = writeln!(program, "G1 Y{:.3}", y0 + r);
        let _ = writeln!(program, "G3 X{:.3} Y{:.3} I{:.3} J0", x0 + r, y0, r);
    }
    program.push_str("M5\n");
    program
}

fn bench_arc_tessellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_tessellation");

    for radius in [1.0, 10.0, 100.0] {
        let start = Vector2::new(radius, 0.0);
        let end = Vector2::new(0.0, radius);
        group.bench_with_input(BenchmarkId::new("cw_three_quarters", radius), &radius, |b, _| {
            let tessellator = ArcTessellator::default();
            b.iter(|| {
                let points = tessellator.tessellate(
                    MotionMode::ArcClockwise,
                    black_box(start),
                    black_box(end),
                    Vector2::ZERO,
                );
                black_box(points);
            });
        });
    }

    group.finish();
}

fn bench_accumulate_and_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate_normalize");

    for loops in [10, 100] {
        let program = generate_program(loops);
        let events: Vec<MotionEvent> = match GcodeReader::new().read(&program) {
            Ok(events) => events,
            Err(e) => panic!("benchmark program failed to read: {e}"),
        };

        group.bench_with_input(BenchmarkId::new("accumulate", loops), &events, |b, evts| {
            b.iter(|| black_box(accumulate(evts.iter().copied())));
        });

        let path = accumulate(events.iter().copied());
        group.bench_with_input(
            BenchmarkId::new("normalize", loops),
            path.vertices(),
            |b, vertices| {
                b.iter(|| black_box(normalize(black_box(vertices))));
            },
        );
    }

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for loops in [10, 100] {
        let program = generate_program(loops);
        group.bench_with_input(BenchmarkId::from_parameter(loops), &program, |b, text| {
            let importer = GcodeImporter::new("pocket.nc");
            b.iter(|| black_box(importer.import(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_arc_tessellation,
    bench_accumulate_and_normalize,
    bench_import
);
criterion_main!(benches);
