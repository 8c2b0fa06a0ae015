use std::{collections::VecDeque, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ring_queue::Queue;

const COUNTS: [usize; 3] = [64, 4_096, 65_536];

fn enqueue_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_then_drain");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::new("ring_queue", count), &count, |b, &count| {
            b.iter(|| {
                let mut queue = Queue::default();
                for i in 0..count {
                    queue.enqueue(i).unwrap();
                }
                while let Ok(item) = queue.dequeue() {
                    black_box(item);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_deque", count), &count, |b, &count| {
            b.iter(|| {
                let mut queue = VecDeque::with_capacity(4);
                for i in 0..count {
                    queue.push_back(i);
                }
                while let Some(item) = queue.pop_front() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

fn steady_state(c: &mut Criterion) {
    // a warm queue that wraps around without growing
    let mut queue = Queue::new(1_024).unwrap();
    for i in 0..512_u64 {
        queue.enqueue(i).unwrap();
    }

    c.bench_function("steady_state_rotate", |b| {
        b.iter(|| {
            let item = queue.dequeue().unwrap();
            queue.enqueue(black_box(item)).unwrap();
        });
    });
}

fn traverse(c: &mut Criterion) {
    let queue: Queue<u64> = (0..4_096).collect();

    c.bench_function("iter_sum", |b| {
        b.iter(|| black_box(queue.iter().sum::<u64>()));
    });

    c.bench_function("cursor_sum", |b| {
        b.iter(|| {
            let mut cursor = queue.cursor();
            let mut sum = 0;
            while cursor.move_next(&queue).unwrap() {
                sum += cursor.current(&queue).unwrap().copied().unwrap_or_default();
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, enqueue_then_drain, steady_state, traverse);
criterion_main!(benches);
