use bytescan::prelude::*;
use rand::random_range;

fn get_random_column(rows: usize) -> Vec<u8> {
    (0..rows).map(|_| random_range(0..=u8::MAX)).collect()
}

fn main() {
    let rows: usize = std::env::args()
        .nth(1)
        .expect("Need number of rows")
        .parse()
        .unwrap();
    let value: u8 = std::env::args()
        .nth(2)
        .map(|v| v.parse().unwrap())
        .unwrap_or(128);

    let column = get_random_column(rows);
    let mut bitmap = vec![0u64; word_count(rows)];

    for signing in Signing::ALL {
        for cmp in CmpOp::ALL {
            bitmap.fill(u64::MAX);

            let start_time = std::time::Instant::now();
            Predicate::new(cmp)
                .with_signing(signing)
                .scan(&column, value, &mut bitmap);
            let elapsed = start_time.elapsed();

            let gb_per_sec = rows as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1e9;
            println!(
                "{signing:>8} x {cmp:<2} {value}: {} rows match \n elapsed time: {:?} ({gb_per_sec:.2} GB/s)",
                count_rows(&bitmap, rows),
                elapsed,
            );
        }
    }

    // Two-predicate intersection: value <= x < 2 * value
    bitmap.fill(u64::MAX);
    let start_time = std::time::Instant::now();
    Predicate::new(CmpOp::Gte).scan(&column, value, &mut bitmap);
    Predicate::new(CmpOp::Lt).scan(&column, value.saturating_mul(2), &mut bitmap);
    println!(
        "Range [{value}, {}): {} rows match \n elapsed time: {:?}",
        value.saturating_mul(2),
        count_rows(&bitmap, rows),
        start_time.elapsed()
    );
}
