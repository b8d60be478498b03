use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kcda::AddressClassifier;

fn benchmark_classify(c: &mut Criterion) {
    let classifier = AddressClassifier::new();

    c.bench_function("classify_full_address", |b| {
        b.iter(|| classifier.classify(black_box("서울특별시 강남구 테헤란로 123")))
    });

    c.bench_function("classify_gun_address", |b| {
        b.iter(|| classifier.classify(black_box("부산광역시 기장군 기장읍 차성로 22")))
    });

    c.bench_function("classify_fallback_address", |b| {
        b.iter(|| classifier.classify(black_box("서울특별시 테헤란로 123")))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let classifier = AddressClassifier::new();
    let addresses: Vec<&str> = vec![
        "서울특별시 강남구 테헤란로 123",
        "서울특별시 종로구 세종대로 175",
        "부산광역시 해운대구 우동 1408",
        "부산광역시 수영구 광안해변로 219",
        "대구광역시 수성구 달구벌대로 2450",
        "인천광역시 연수구 송도과학로 32",
        "광주광역시 광산구 첨단중앙로 23",
        "대전광역시 유성구 대학로 99",
        "울산광역시 남구 삼산로 35",
        "경기도 수원시 팔달로 100",
    ];

    c.bench_function("classify_batch_10", |b| {
        b.iter(|| classifier.classify_batch(black_box(&addresses)))
    });
}

fn benchmark_init(c: &mut Criterion) {
    c.bench_function("classifier_init", |b| b.iter(AddressClassifier::new));
}

criterion_group!(benches, benchmark_classify, benchmark_batch, benchmark_init);
criterion_main!(benches);
