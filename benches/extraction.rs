use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weather_extractor::WeatherExtractor;

fn build_report(lines: usize) -> Vec<String> {
    (0..lines)
        .map(|i| {
            if i % 10 == 0 {
                format!("[{}] heartbeat, no weather here", i)
            } else {
                format!(
                    "Date: 2024-{:02}-{:02}, Max Temp: {}.5Â°C, Min Temp: {}.1°C, Humidity: {}%, Precipitation: {}.0mm",
                    i % 12 + 1,
                    i % 28 + 1,
                    20 + i % 15,
                    10 + i % 10,
                    40 + i % 60,
                    i % 7
                )
            }
        })
        .collect()
}

fn bench_extract_all(c: &mut Criterion) {
    let extractor = WeatherExtractor::new().unwrap().with_max_unmatched_samples(0);
    let report = build_report(10_000);

    c.bench_function("extract_all_10k_lines", |b| {
        b.iter(|| extractor.extract_all(black_box(&report)))
    });
}

criterion_group!(benches, bench_extract_all);
criterion_main!(benches);
