use criterion::{criterion_group, criterion_main, Criterion};
use directory::{
    directory::{cursor::neighbors, directory::Directory, filter::filter},
    model::{event::Direction, person::Person},
};

fn people(count: usize) -> Vec<Person> {
    (0..count)
        .map(|index| Person::new_test(index, &format!("Person {} Surname{}", index, index % 97)))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let all = people(10_000);

    c.bench_function("filter 10k by substring", |b| {
        b.iter(|| filter(&all, "surname4"));
    });

    c.bench_function("filter 10k empty query", |b| {
        b.iter(|| filter(&all, ""));
    });

    c.bench_function("neighbors 10k", |b| {
        b.iter(|| {
            for index in 0..all.len() {
                let _ = neighbors(&all, index);
            }
        });
    });

    c.bench_function("search then walk 1000", |b| {
        b.iter(|| {
            let mut directory = Directory::new();
            directory.load(people(1_000));
            directory.search("surname1");

            if let Some(first) = directory.active_records().first().map(|p| p.id) {
                let _ = directory.open(first);

                for _ in 0..directory.active_records().len() {
                    let _ = directory.advance(Direction::Next);
                }
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
