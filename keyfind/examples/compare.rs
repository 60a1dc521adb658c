use std::num::NonZeroUsize;

use keyfind::driver::{
    DriverConfig,
    StructureKind,
    run,
};

fn main() -> keyfind::Result<()> {
    let config = DriverConfig {
        table_capacity: NonZeroUsize::new(10_007).unwrap(),
        print_results: false,
    };

    // Scrambled eight-digit ids, plus one absent nine-digit id per hundred.
    let ids: Vec<i64> = (0..5_000i64)
        .map(|i| 10_000_000 + (i * 7_919_993) % 89_999_999)
        .collect();
    let lookups: Vec<i64> = ids
        .iter()
        .copied()
        .chain((0..50).map(|i| 100_000_000 + i))
        .collect();

    for kind in StructureKind::ALL {
        let report = run(&config, kind, &ids, &lookups)?;
        println!(
            "{kind:<26} insert {:>10.6}s  find {:>10.6}s  {} hits, {} misses",
            report.insert_time.as_secs_f64(),
            report.find_time.as_secs_f64(),
            report.hits(),
            report.misses()
        );
    }
    Ok(())
}
