//! Benchmarks for aggregation and evaluation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oddsarb_core::{EventInfo, Quote, StakeConfig};
use oddsarb_detector::{aggregate, evaluate};

fn bench_quotes() -> Vec<Quote> {
    let books = ["betco", "oddsinc", "pinsharp", "wager365", "bookline"];
    let outcomes = [("Win", 3.00), ("Draw", 3.40), ("Loss", 3.00)];

    books
        .iter()
        .enumerate()
        .flat_map(|(i, book)| {
            outcomes.iter().map(move |(name, price)| {
                Quote::new(*name, price + i as f64 * 0.01, book.to_uppercase(), *book)
            })
        })
        .collect()
}

fn bench_event() -> EventInfo {
    EventInfo {
        id: "bench".to_string(),
        sport_key: "soccer_epl".to_string(),
        home_team: "Home FC".to_string(),
        away_team: "Away FC".to_string(),
        commence_time: "2024-01-15T20:00:00Z".parse().unwrap(),
    }
}

fn detection_benchmark(c: &mut Criterion) {
    let quotes = bench_quotes();
    let event = bench_event();
    let stake = StakeConfig {
        total_stake: 300.0,
        min_profit_margin_pct: 0.0,
    };
    let snapshot = aggregate(&quotes);

    c.bench_function("aggregate_15_quotes", |b| {
        b.iter(|| aggregate(black_box(&quotes)))
    });

    c.bench_function("evaluate_3_outcomes", |b| {
        b.iter(|| evaluate(black_box(&event), "h2h", black_box(&snapshot), &stake))
    });
}

criterion_group!(benches, detection_benchmark);
criterion_main!(benches);
