use std::hint::black_box;
use std::io::Write;

use ccshare::ReadSessionOptions;
use ccshare::indexer::summarize_log_file;
use ccshare::parsers::read_records;
use ccshare::reader::read_session;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::NamedTempFile;

/// Generate a synthetic session log alternating user prompts and tool-using assistant turns
fn generate_log_file(num_records: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(
        file,
        r#"{{"type":"file-history-snapshot","messageId":"m0","snapshot":{{"trackedFileBackups":{{}}}},"isSnapshotUpdate":false}}"#
    )
    .unwrap();
    for i in 0..num_records {
        let line = if i % 2 == 0 {
            format!(
                r#"{{"type":"user","uuid":"u{i}","parentUuid":"a{prev}","sessionId":"bench","timestamp":"2025-01-{day:02}T12:00:00Z","isSidechain":false,"gitBranch":"main","message":{{"role":"user","content":"Prompt number {i} asking for a change"}}}}"#,
                prev = i.saturating_sub(1),
                day = (i % 28) + 1,
            )
        } else {
            format!(
                r#"{{"type":"assistant","uuid":"a{i}","parentUuid":"u{prev}","sessionId":"bench","timestamp":"2025-01-{day:02}T12:00:01Z","isSidechain":false,"message":{{"role":"assistant","model":"claude-sonnet","content":[{{"type":"text","text":"Working on it"}},{{"type":"tool_use","id":"t{i}","name":"Read","input":{{"file_path":"/work/src/lib.rs"}}}}],"usage":{{"input_tokens":120,"output_tokens":40}}}}}}"#,
                prev = i - 1,
                day = (i % 28) + 1,
            )
        };
        writeln!(file, "{}", line).unwrap();
    }
    writeln!(file, "not json at all").unwrap();

    file.flush().unwrap();
    file
}

fn bench_read_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_records");

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_log_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| read_records(black_box(file.path())).unwrap().count());
        });
    }

    group.finish();
}

fn bench_summarize_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_log_file");

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_log_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| summarize_log_file(black_box(file.path()), "/work"));
        });
    }

    group.finish();
}

fn bench_read_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_session");

    for size in [100, 1_000, 10_000].iter() {
        let file = generate_log_file(*size);
        let entry = summarize_log_file(file.path(), "/work").unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| read_session(black_box(&entry), &ReadSessionOptions::default()).messages.len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_records, bench_summarize_log, bench_read_session);
criterion_main!(benches);
