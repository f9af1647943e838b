//! Benchmarks for the stream parser and answer rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kbchat::markdown::render_markdown;
use kbchat::sse::{SseParser, Utf8StreamDecoder};

/// A stream with `steps` thinking records followed by a final answer
fn generate_stream(steps: usize) -> String {
    let mut stream = String::from(
        "data: {\"type\":\"thread_created\",\"content\":\"\",\"thread_id\":\"thread_bench\"}\n\n",
    );
    for i in 0..steps {
        stream.push_str(&format!(
            "data: {{\"type\":\"thinking\",\"content\":\"Searching section {} of the índice\"}}\n\n",
            i + 1
        ));
    }
    stream.push_str(
        "data: {\"type\":\"final\",\"content\":{\"format\":\"markdown\",\"text\":\"**Done**\"}}\n\n",
    );
    stream
}

fn generate_answer(sections: usize) -> String {
    let section = r#"
The chapter covers **three ideas** and a few `examples`.

1. First idea with a [reference](https://example.com)
2. Second idea
   - nested detail

> A quoted passage from the book.

| Term | Meaning |
|------|---------|
| one  | first   |
| two  | second  |
"#;

    (0..sections)
        .map(|i| format!("## Part {}\n{}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode and parse the body delivered in fixed-size chunks
fn bench_parse_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_parse_chunked");
    let stream = generate_stream(200);
    group.throughput(Throughput::Bytes(stream.len() as u64));

    for chunk_size in [7, 64, 1024, 16 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_byte_chunks", chunk_size)),
            &stream,
            |b, stream| {
                b.iter(|| {
                    let mut decoder = Utf8StreamDecoder::new();
                    let mut parser = SseParser::new();
                    let mut count = 0;
                    for chunk in stream.as_bytes().chunks(chunk_size) {
                        let text = decoder.decode(black_box(chunk));
                        count += parser.feed(&text).len();
                    }
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

fn bench_render_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_render");

    for sections in [1, 10, 50] {
        let answer = generate_answer(sections);
        group.throughput(Throughput::Bytes(answer.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_sections", sections)),
            &answer,
            |b, answer| b.iter(|| black_box(render_markdown(black_box(answer)))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_chunked, bench_render_answer);
criterion_main!(benches);
