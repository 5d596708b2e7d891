#![feature(test)]

extern crate test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test::Bencher;

fn input_short() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..1000)
        .map(|_| format!("{}", rng.gen_range(0..1_000_000) as f64 / 1000.0))
        .collect()
}

fn input_shortest() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(2);
    let mut buffer = zmij::Buffer::new();
    (0..1000)
        .map(|_| buffer.format(rng.gen::<f64>() * 1e300).to_owned())
        .collect()
}

fn input_long() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(3);
    (0..1000)
        .map(|_| format!("{:.60e}", rng.gen::<f64>()))
        .collect()
}

fn bench_lexical(b: &mut Bencher, input: &[String]) {
    b.bytes = input.iter().map(|s| s.len() as u64).sum();
    b.iter(|| {
        for s in input {
            test::black_box(lexical_float::from_chars::<f64>(s.as_bytes()));
        }
    });
}

fn bench_std(b: &mut Bencher, input: &[String]) {
    b.bytes = input.iter().map(|s| s.len() as u64).sum();
    b.iter(|| {
        for s in input {
            test::black_box(s.parse::<f64>().unwrap());
        }
    });
}

#[bench]
fn bench_short(b: &mut Bencher) {
    bench_lexical(b, &input_short());
}

#[bench]
fn bench_short_std(b: &mut Bencher) {
    bench_std(b, &input_short());
}

#[bench]
fn bench_shortest(b: &mut Bencher) {
    bench_lexical(b, &input_shortest());
}

#[bench]
fn bench_shortest_std(b: &mut Bencher) {
    bench_std(b, &input_shortest());
}

#[bench]
fn bench_long(b: &mut Bencher) {
    bench_lexical(b, &input_long());
}

#[bench]
fn bench_long_std(b: &mut Bencher) {
    bench_std(b, &input_long());
}

#[bench]
fn bench_halfway(b: &mut Bencher) {
    // Needs the big-integer comparison every time.
    let input = vec![String::from("18446744073709553664"); 1000];
    bench_lexical(b, &input);
}
