use attributes_to_csv::app::services::csv_codec::{encode_line, split_fields};
use attributes_to_csv::{AttributeMap, FlowRecord, RecordConverter, SelectionConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_encode_line(c: &mut Criterion) {
    let plain: Vec<String> = (0..16).map(|i| format!("value-{}", i)).collect();
    let quoted: Vec<String> = (0..16)
        .map(|i| format!("value {}, \"quoted\"\nline", i))
        .collect();

    c.bench_function("encode_line/plain", |b| {
        b.iter(|| encode_line(black_box(&plain)))
    });
    c.bench_function("encode_line/quoted", |b| {
        b.iter(|| encode_line(black_box(&quoted)))
    });
}

fn bench_split_fields(c: &mut Criterion) {
    let list = "\"beach,name\",\"beach,location\",path,filename,uuid,moreInfo1,moreInfo2";

    c.bench_function("split_fields", |b| b.iter(|| split_fields(black_box(list))));
}

fn bench_convert_record(c: &mut Criterion) {
    let attributes: AttributeMap = (0..32)
        .map(|i| (format!("beach-{}", i), format!("Malibu Beach, {}", i)))
        .collect();
    let record = FlowRecord::new(attributes, "");

    let converter = RecordConverter::new(
        SelectionConfig::default()
            .with_pattern("beach-.*")
            .unwrap_or_default()
            .with_schema(true),
    );

    c.bench_function("convert_record", |b| {
        b.iter(|| converter.convert(black_box(record.clone())))
    });
}

criterion_group!(
    encode_benches,
    bench_encode_line,
    bench_split_fields,
    bench_convert_record
);
criterion_main!(encode_benches);
