use criterion::{criterion_group, criterion_main, Criterion};
use json_matchers::{is_json, MatcherState, Received};
use std::fs;

macro_rules! build_diagnostic_benchmark {
    ($func : tt, $filename : expr, $render : expr) => {
        fn $func() {
            let text =
                fs::read_to_string(format!("fixtures/json/invalid/{}.json", $filename)).unwrap();
            let verdict = is_json(&MatcherState::default(), &Received::from(text)).unwrap();
            if $render {
                let _ = verdict.message();
            }
        }
    };
}

build_diagnostic_benchmark!(verdict_only, "missing_colon", false);
build_diagnostic_benchmark!(with_caret, "missing_colon", true);
build_diagnostic_benchmark!(end_of_input, "unterminated", true);

fn benchmark_verdict_only(c: &mut Criterion) {
    c.bench_function("invalid verdict without message", |b| b.iter(verdict_only));
}

fn benchmark_with_caret(c: &mut Criterion) {
    c.bench_function("invalid verdict with caret message", |b| b.iter(with_caret));
}

fn benchmark_end_of_input(c: &mut Criterion) {
    c.bench_function("truncated input with caret message", |b| b.iter(end_of_input));
}

criterion_group!(
    benches,
    benchmark_verdict_only,
    benchmark_with_caret,
    benchmark_end_of_input
);
criterion_main!(benches);
