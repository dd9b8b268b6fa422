use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nsec3_core::{CrackFormat, Nsec3Format};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters-digits-hyphen alphabet typical of hostname dictionaries
const LDH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Generates a specified number of random candidate labels.
/// Uses a fixed seed for reproducible benchmark results.
fn generate_candidates(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut candidates = Vec::with_capacity(count);

    for _ in 0..count {
        let length = rng.gen_range(1..=16);
        let mut label = String::with_capacity(length);
        for _ in 0..length {
            label.push(LDH_CHARS[rng.gen_range(0..LDH_CHARS.len())] as char);
        }
        candidates.push(label);
    }

    candidates
}

const RECORD: &str =
    "$NSEC3$100$4141414141414141$8c2d583acbe22616c69bb457e0c2111ced0a6e77$example.com.";

fn bench_evaluate(c: &mut Criterion) {
    let format = Nsec3Format;
    let descriptor = format.descriptor(RECORD).unwrap();
    let candidates = generate_candidates(1000);

    c.bench_function("evaluate_1000_candidates_100_iterations", |b| {
        b.iter(|| {
            for candidate in &candidates {
                let digest =
                    format.evaluate(black_box(&descriptor), black_box(candidate)).unwrap();
                black_box(format.matches(&descriptor, &digest));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let format = Nsec3Format;

    c.bench_function("parse_record", |b| {
        b.iter(|| black_box(format.descriptor(black_box(RECORD)).unwrap()))
    });
}

criterion_group!(benches, bench_evaluate, bench_parse);
criterion_main!(benches);
