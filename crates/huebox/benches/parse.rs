use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huebox::gradient::Gradient;
use huebox::{from_string, Color, ColorFormat};

const INPUTS: [&str; 8] = [
    "rebeccapurple",
    "#c0ffee",
    "#c0ffee80",
    "rgb(12, 34, 56)",
    "rgba(12, 34, 56, 0.5)",
    "hsl(210, 50%, 40%)",
    "hsla(210, 50%, 40%, 0.5)",
    "hsv(210, 50%, 40%)",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("from-string", |b| {
        b.iter(|| {
            for input in INPUTS {
                let _ = from_string(black_box(input));
            }
        })
    });

    let colors: Vec<Color> = INPUTS.iter().filter_map(|s| from_string(s).ok()).collect();
    group.bench_function("convert-all", |b| {
        b.iter(|| {
            for color in &colors {
                for format in ColorFormat::ALL {
                    black_box(color.to(format));
                }
            }
        })
    });

    group.bench_function("serialize", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(color.to_string());
            }
        })
    });

    group.finish();

    let mut group = c.benchmark_group("gradient");
    let gradient = Gradient::parse("linear-gradient(90deg, red, hsl(120, 100%, 50%) 40%, #00f)");

    group.bench_function("add-step", |b| {
        b.iter(|| {
            if let Ok(mut gradient) = gradient.clone() {
                let _ = gradient.add_step(black_box(70));
                black_box(gradient);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
