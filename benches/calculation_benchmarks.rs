//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the bare calculation pipeline, payslip assembly with its audit
//! trace, and a full request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, CalculationRequest, create_router};
use payroll_engine::calculation::{build_payslip, calculate_net_salary_with_table};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{AttendanceRecord, Hours, Money, SpecialDeductions};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn create_attendance() -> AttendanceRecord {
    AttendanceRecord {
        work_hours: Hours::from(174),
        overtime_weekday: Hours::from(3),
        overtime_weekend: Hours::from(8),
        overtime_holiday: Hours::from(2),
        absence_hours: Hours::from(4),
    }
}

fn create_deductions() -> SpecialDeductions {
    SpecialDeductions {
        children_education: Money::from_minor_units(200000),
        housing_loan_interest: Money::from_minor_units(100000),
        support_elderly: Money::from_minor_units(300000),
        ..Default::default()
    }
}

fn create_request(employee_index: usize) -> CalculationRequest {
    CalculationRequest {
        employee_id: format!("emp_{:04}", employee_index),
        base_salary: Some(Money::from_minor_units(600000 + employee_index as i64 * 1000)),
        attendance: create_attendance(),
        deductions: create_deductions(),
    }
}

/// Benchmark: net salary figures only.
fn bench_net_salary(c: &mut Criterion) {
    let config = load_config();
    let attendance = create_attendance();
    let deductions = create_deductions();

    c.bench_function("net_salary", |b| {
        b.iter(|| {
            calculate_net_salary_with_table(
                black_box(config.payroll_config()),
                black_box(&attendance),
                black_box(&deductions),
                config.tax_table(),
            )
        })
    });
}

/// Benchmark: payslip with audit trace.
fn bench_payslip(c: &mut Criterion) {
    let config = load_config();
    let attendance = create_attendance();
    let deductions = create_deductions();

    c.bench_function("payslip", |b| {
        b.iter(|| {
            build_payslip(
                black_box("emp_0001"),
                config.payroll_config(),
                black_box(&attendance),
                black_box(&deductions),
                config.tax_table(),
            )
        })
    });
}

/// Benchmark: one request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::to_string(&create_request(1)).unwrap();

    c.bench_function("single_request", |b| {
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
    });
}

/// Benchmark: a payroll run over a growing number of employees.
fn bench_payroll_run(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("payroll_run");

    for count in [10usize, 100, 1000] {
        let requests: Vec<CalculationRequest> = (0..count).map(create_request).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &requests, |b, requests| {
            b.iter(|| {
                for request in requests {
                    let payroll = request.effective_config(config.payroll_config());
                    let payslip = build_payslip(
                        &request.employee_id,
                        &payroll,
                        &request.attendance,
                        &request.deductions,
                        config.tax_table(),
                    );
                    let _ = black_box(payslip);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_net_salary,
    bench_payslip,
    bench_single_request,
    bench_payroll_run,
);
criterion_main!(benches);
