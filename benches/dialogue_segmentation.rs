use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use messenger_dialogues::config::SpeakerTokens;
use messenger_dialogues::models::{MessageMap, NormalizedMessage};
use messenger_dialogues::segment_dialogues;

/// Generate N messages, a new dialogue roughly every 20 messages
fn generate_messages(num_messages: usize) -> MessageMap {
    (0..num_messages)
        .map(|i| {
            // One minute apart, plus a two hour silence before every 20th message
            let timestamp = (i as i64) * 60_000 + (i as i64 / 20) * 7_200_000;
            let message = NormalizedMessage {
                timestamp,
                is_self: i % 2 == 0,
                text: format!("Test message {}", i),
            };
            (timestamp, message)
        })
        .collect()
}

fn bench_segment_dialogues(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_dialogues");
    let tokens = SpeakerTokens::default();

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let messages = generate_messages(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| segment_dialogues(black_box(messages.clone()), 3_600_000, &tokens));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment_dialogues);
criterion_main!(benches);
