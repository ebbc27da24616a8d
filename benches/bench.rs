// Criterion benchmarks for VowMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vowmatch::core::{dedupe_vendors, filter_candidates, rank_by_rating, parse_money_range};
use vowmatch::models::{PriceIndicator, SearchParams, Vendor, VendorCategory};

fn create_candidate(id: usize) -> Vendor {
    let price_ranges = [
        "£500-£1,000",
        "£1,000-£2,500",
        "£2,500-£5,000",
        "£5,000-£10,000",
        "£10,000+",
    ];
    let locations = ["London", "Central London", "Surrey", "Manchester", "Leeds"];

    Vendor {
        id: format!("venue-{}", id),
        name: format!("Venue {}", id % 40),
        category: VendorCategory::Venue,
        description: String::new(),
        location: locations[id % locations.len()].to_string(),
        address: None,
        phone: None,
        website: None,
        rating: 4.0 + (id % 10) as f64 / 10.0,
        review_count: 20 + (id * 7 % 200) as u32,
        price_range: price_ranges[id % price_ranges.len()].to_string(),
        price_indicator: PriceIndicator::Moderate,
        features: vec!["Dance floor".to_string(), "Bridal suite".to_string()],
        specialties: vec!["Garden weddings".to_string()],
        verified: id % 3 == 0,
        response_time: None,
    }
}

fn create_params() -> SearchParams {
    SearchParams {
        category: VendorCategory::Venue,
        location: "London".to_string(),
        budget_range: Some("£2,500 - £5,000".to_string()),
        guest_count: Some(120),
        wedding_date: None,
        radius_km: 50,
        preferences: vec![],
    }
}

fn bench_parse_money_range(c: &mut Criterion) {
    c.bench_function("parse_money_range", |b| {
        b.iter(|| parse_money_range(black_box("£2,500 - £5,000")));
    });
}

fn bench_filtering(c: &mut Criterion) {
    let params = create_params();

    let mut group = c.benchmark_group("filtering");
    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Vendor> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("filter_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| filter_candidates(black_box(candidates.clone()), black_box(&params)));
            },
        );
    }
    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let candidates: Vec<Vendor> = (0..500).map(create_candidate).collect();

    c.bench_function("dedupe_vendors_500", |b| {
        b.iter(|| dedupe_vendors(black_box(candidates.clone())));
    });
}

fn bench_fallback_ranking(c: &mut Criterion) {
    let candidates: Vec<Vendor> = (0..500).map(create_candidate).collect();

    c.bench_function("rank_by_rating_500", |b| {
        b.iter(|| rank_by_rating(black_box(candidates.clone())));
    });
}

fn bench_full_pipeline_stages(c: &mut Criterion) {
    let params = create_params();
    let candidates: Vec<Vendor> = (0..200).map(create_candidate).collect();

    c.bench_function("filter_dedupe_rank_200", |b| {
        b.iter(|| {
            let filtered = filter_candidates(candidates.clone(), &params);
            let deduped = dedupe_vendors(filtered);
            black_box(rank_by_rating(deduped))
        });
    });
}

criterion_group!(
    benches,
    bench_parse_money_range,
    bench_filtering,
    bench_dedup,
    bench_fallback_ranking,
    bench_full_pipeline_stages
);

criterion_main!(benches);
