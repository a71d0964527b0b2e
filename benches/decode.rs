use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde::{Deserialize, Serialize};
use serde_lenient::{LenientBool, LenientFloat, LenientInt, LenientString};

#[derive(Clone, Serialize, Deserialize)]
struct Person {
    #[serde(default)]
    name: LenientString,
    #[serde(default)]
    age: LenientInt,
    #[serde(default)]
    sex: LenientBool,
    #[serde(default)]
    height: LenientFloat,
}

const PERSON_JSON: &str = "{\"name\":\"小明\",\"age\":null,\"sex\":\"true\",\"height\":\"180.00\"}";

fn bench_person(c: &mut Criterion) {
    let person: Person = serde_lenient::from_str(PERSON_JSON).expect("decode failed");

    let mut group = c.benchmark_group("person");
    group.bench_function("decode", |b| {
        b.iter(|| {
            let decoded: Person =
                serde_lenient::from_str(black_box(PERSON_JSON)).expect("decode failed");
            black_box(decoded);
        });
    });
    group.bench_function("encode", |b| {
        b.iter(|| {
            let encoded = serde_lenient::to_string(black_box(&person)).expect("encode failed");
            black_box(encoded);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_person);
criterion_main!(benches);
