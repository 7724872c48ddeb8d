//! Evaluate benchmarks — the hot path.
//!
//! Measures: leaf hit/miss, combinator fan-out, deep negation chains, and
//! the cost of the two rendering forms.

use akin::prelude::*;

fn main() {
    divan::main();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Test fixtures
// ═══════════════════════════════════════════════════════════════════════════════

fn one_of(values: impl IntoIterator<Item = i64>) -> Pattern {
    Pattern::new(IsOneOf::new(values))
}

/// An OR chain of `width` alternatives, none of which match the probe.
fn wide_or(width: i64) -> Pattern {
    let mut pattern = one_of([0]) | one_of([1]);
    for i in 2..width {
        pattern = pattern | one_of([i]);
    }
    pattern
}

// ═══════════════════════════════════════════════════════════════════════════════
// Leaf comparison (baseline)
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn leaf_hit(bencher: divan::Bencher) {
    let pattern = one_of([1, 2, 3]);
    let value = Value::from(2);

    bencher.bench_local(|| pattern.compare_eq(&value));
}

#[divan::bench]
fn leaf_miss(bencher: divan::Bencher) {
    let pattern = one_of([1, 2, 3]);
    let value = Value::from(9);

    bencher.bench_local(|| pattern.compare_eq(&value));
}

#[divan::bench]
fn leaf_capture_of_large_value(bencher: divan::Bencher) {
    let pattern = Pattern::new(Anything);
    let value = Value::list((0..256).map(Value::Int));

    // Dominated by the capture clone, not the predicate.
    bencher.bench_local(|| pattern.compare_eq(&value));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Combinator fan-out
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench(args = [4, 16, 64])]
fn or_fanout_miss(bencher: divan::Bencher, width: i64) {
    let pattern = wide_or(width);
    let value = Value::from(-1);

    bencher.bench_local(|| pattern.compare_eq(&value));
}

#[divan::bench(args = [4, 16, 64])]
fn or_fanout_first_hit(bencher: divan::Bencher, width: i64) {
    let pattern = wide_or(width);
    let value = Value::from(0);

    bencher.bench_local(|| pattern.compare_eq(&value));
}

#[divan::bench(args = [8, 32])]
fn deep_negation_chain(bencher: divan::Bencher, depth: usize) {
    let mut pattern = one_of([1]);
    for _ in 0..depth {
        pattern = !pattern;
    }
    let value = Value::from(1);

    bencher.bench_local(|| pattern.compare_eq(&value));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

#[divan::bench]
fn render_structure(bencher: divan::Bencher) {
    let pattern = wide_or(16);

    bencher.bench_local(|| pattern.render_unmatched());
}

#[divan::bench]
fn render_matched_value(bencher: divan::Bencher) {
    let pattern = one_of([2]);
    assert!(pattern.compare_eq(&Value::from(2)));

    bencher.bench_local(|| pattern.to_string());
}
