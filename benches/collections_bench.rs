use amortized_collections::{Array2D, LinkedList, SimpleQueue, Stack};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;

fn bench_stack(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("Vec vs Stack (Push/Pop 1024)");
    group.bench_function("std::vec::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..n {
                v.push(black_box(i));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });
    group.bench_function("Stack", |b| {
        b.iter(|| {
            let mut st = Stack::new();
            for i in 0..n {
                st.push(black_box(i));
            }
            while let Some(x) = st.pop() {
                black_box(x);
            }
        })
    });
    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("VecDeque vs SimpleQueue (Enqueue/Dequeue 1024)");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut q = VecDeque::new();
            for i in 0..n {
                q.push_back(black_box(i));
            }
            while let Some(x) = q.pop_front() {
                black_box(x);
            }
        })
    });
    group.bench_function("SimpleQueue", |b| {
        b.iter(|| {
            let mut q = SimpleQueue::new();
            for i in 0..n {
                q.enqueue(black_box(i));
            }
            while let Some(x) = q.dequeue() {
                black_box(x);
            }
        })
    });
    group.finish();
}

fn bench_linked_list(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("LinkedList (PushBack/PopFront 1024)");
    group.bench_function("std::collections::LinkedList", |b| {
        b.iter(|| {
            let mut l = std::collections::LinkedList::new();
            for i in 0..n {
                l.push_back(black_box(i));
            }
            while let Some(x) = l.pop_front() {
                black_box(x);
            }
        })
    });
    group.bench_function("LinkedList", |b| {
        b.iter(|| {
            let mut l = LinkedList::new();
            for i in 0..n {
                l.push_back(black_box(i));
            }
            while let Some(x) = l.pop_front() {
                black_box(x);
            }
        })
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Array2D (Index 64x64)");
    let grid = Array2D::new(64, 64, 1u32);
    group.bench_function("Array2D", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for r in 0..64 {
                for col in 0..64 {
                    sum += grid[(black_box(r), black_box(col))];
                }
            }
            sum
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_stack,
    bench_queue,
    bench_linked_list,
    bench_grid
);
criterion_main!(benches);
