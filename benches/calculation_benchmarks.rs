//! Performance benchmarks for the Tax Computation Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single full-return recomputation: < 100μs mean
//! - Batch of 100 returns: < 10ms mean
//! - Batch of 1000 returns: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use tax_engine::calculation::{ReturnForms, compute_tax_return};
use tax_engine::config::{ConfigLoader, TaxYearConfig};

/// Loads the 2025-26 rate configuration.
fn load_config() -> TaxYearConfig {
    ConfigLoader::load("./config/2025-26")
        .expect("Failed to load config")
        .into_config()
}

/// A minimal return: salary only.
fn salary_only_forms() -> ReturnForms {
    let mut forms = ReturnForms::default();
    forms
        .income
        .set_amount("monthly_basic_salary", Decimal::from(600_000));
    forms
        .income
        .set_amount("salary_tax_deducted", Decimal::from(1_800_000));
    forms
}

/// A return touching every form section.
fn comprehensive_forms() -> ReturnForms {
    let mut forms = ReturnForms::default();

    forms
        .income
        .set_amount("monthly_basic_salary", Decimal::from(600_000));
    forms
        .income
        .set_amount("monthly_allowances", Decimal::from(50_000));
    forms
        .income
        .set_amount("monthly_medical_allowance", Decimal::from(12_000));
    forms
        .income
        .set_amount("directorship_fee", Decimal::from(40_000));
    forms
        .income
        .set_amount("profit_on_debt_15", Decimal::from(150_000));
    forms
        .income
        .set_amount("rent_income", Decimal::from(240_000));
    forms
        .income
        .set_amount("salary_tax_deducted", Decimal::from(1_800_000));

    forms
        .adjustable_tax
        .set_amount("electricity_domestic_gross_receipt", Decimal::from(96_000));
    forms
        .reductions
        .set_amount("teacher_reduction", Decimal::from(25_000));
    forms
        .credits
        .set_amount("charitable_donation", Decimal::from(50_000));
    forms.deductions.set_amount("zakat", Decimal::from(90_000));
    forms
        .final_tax
        .set_amount("sukuk_bonds_gross_amount", Decimal::from(400_000));
    forms
        .capital_gain
        .set_amount("property_2_3_years", Decimal::from(1_500_000));
    forms.expenses.set_amount("rent", Decimal::from(600_000));
    forms
        .wealth
        .set_amount("property_current_year", Decimal::from(12_000_000));
    forms
        .wealth
        .set_amount("property_previous_year", Decimal::from(9_000_000));

    forms
}

/// Benchmarks a single full-return recomputation.
fn bench_single_return(c: &mut Criterion) {
    let config = load_config();
    let salary_only = salary_only_forms();
    let comprehensive = comprehensive_forms();

    let mut group = c.benchmark_group("single_return");

    group.bench_function("salary_only", |b| {
        b.iter(|| compute_tax_return(black_box(&salary_only), black_box(&config)))
    });

    group.bench_function("comprehensive", |b| {
        b.iter(|| compute_tax_return(black_box(&comprehensive), black_box(&config)))
    });

    group.finish();
}

/// Benchmarks batches of independent returns.
fn bench_return_batches(c: &mut Criterion) {
    let config = load_config();
    let forms = comprehensive_forms();

    let mut group = c.benchmark_group("return_batches");

    for batch_size in [100usize, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &size| {
                b.iter(|| {
                    for _ in 0..size {
                        black_box(compute_tax_return(black_box(&forms), black_box(&config)));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_return, bench_return_batches);
criterion_main!(benches);
