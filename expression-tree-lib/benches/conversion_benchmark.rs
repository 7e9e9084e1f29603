use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use expression_tree::notation::{convert, render_all, Parenthesization};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_and_render");
    let expressions = [
        "3+4*2".to_string(),
        "(1+2)*3".to_string(),
        "8-2-3".to_string(),
        "a+b*(c-d)/e^f".to_string(),
        "(12^3+45)*(678-9)/((10+11)^2-12*13)".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| {
                    convert(expression).map(|tree| render_all(&tree, Parenthesization::Minimal))
                });
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
