//! Performance benchmarks for the Weekly Wage Engine.
//!
//! Covers:
//! - Pricing a single day
//! - Calculating a full week in-process
//! - Rendering the weekly report
//! - The `/calculate` endpoint end to end, single and batched
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveTime;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use weekly_wage_engine::api::{AppState, CalculationRequest, create_router};
use weekly_wage_engine::calculation::{calculate_week, price_day, price_minutes};
use weekly_wage_engine::config::ConfigLoader;
use weekly_wage_engine::models::{DayEntry, Surcharge, WeekDay};
use weekly_wage_engine::report::render_report;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/service.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// A week touching every tier: short, flat, extended, overnight and days off.
fn create_mixed_week() -> Vec<DayEntry> {
    vec![
        DayEntry::worked(WeekDay::Monday, time(8, 0), time(17, 0), Surcharge::Zero),
        DayEntry::worked(WeekDay::Tuesday, time(9, 0), time(13, 0), Surcharge::Zero),
        DayEntry::worked(WeekDay::Wednesday, time(22, 0), time(6, 0), Surcharge::TenThousand),
        DayEntry::off(WeekDay::Thursday),
        DayEntry::worked(WeekDay::Friday, time(8, 0), time(14, 0), Surcharge::FiveThousand),
        DayEntry::worked(WeekDay::Saturday, time(9, 0), time(15, 30), Surcharge::Zero),
        DayEntry::off(WeekDay::Sunday),
    ]
}

/// Creates a request body for a week with `worked_days` days of 08:00-17:00.
fn create_request(worked_days: usize) -> CalculationRequest {
    let days: Vec<serde_json::Value> = WeekDay::ALL
        .iter()
        .enumerate()
        .map(|(i, day)| {
            if i < worked_days {
                serde_json::json!({
                    "day": day,
                    "entry": "08:00",
                    "exit": "17:00",
                    "surcharge": 5000
                })
            } else {
                serde_json::json!({ "day": day, "no_work": true })
            }
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "period": { "start_date": "2026-01-12", "end_date": "2026-01-18" },
        "days": days
    }))
    .expect("Failed to create request")
}

fn bench_day_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_pricing");

    group.bench_function("price_day_extended", |b| {
        let hours = Decimal::new(85, 1);
        b.iter(|| black_box(price_day(black_box(hours), Surcharge::TwentyThousand)))
    });

    group.bench_function("price_minutes_extended", |b| {
        b.iter(|| black_box(price_minutes(black_box(510), Surcharge::TwentyThousand)))
    });

    group.finish();
}

fn bench_calculate_week(c: &mut Criterion) {
    let entries = create_mixed_week();

    c.bench_function("calculate_week", |b| {
        b.iter(|| black_box(calculate_week(black_box(&entries), None).unwrap()))
    });
}

fn bench_render_report(c: &mut Criterion) {
    let calculation = calculate_week(&create_mixed_week(), None).unwrap();

    c.bench_function("render_report", |b| {
        b.iter(|| black_box(render_report(black_box(&calculation))))
    });
}

/// Benchmark: `/calculate` end to end for different numbers of worked days.
fn bench_endpoint_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("calculate_endpoint");

    for worked_days in [0, 1, 5, 7].iter() {
        let router = create_router(state.clone());
        let body = serde_json::to_string(&create_request(*worked_days)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("worked_days", worked_days),
            worked_days,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: Batch of 100 weeks through the router.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| serde_json::to_string(&create_request(i % 8)).unwrap())
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_day_pricing,
    bench_calculate_week,
    bench_render_report,
    bench_endpoint_scaling,
    bench_batch_100,
);
criterion_main!(benches);
