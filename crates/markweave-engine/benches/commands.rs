use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use markweave_engine::{
    ast::FixedIdGenerator,
    editing::{ListCommand, apply_list_command},
    parsing::{ParseOptions, parse},
};
mod common;

fn bench_list_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_commands");
    let content = common::generate_list_with_caret(500, 250);
    let tree = parse(&content, &ParseOptions::default(), &mut FixedIdGenerator);

    for command in [ListCommand::Indent, ListCommand::Outdent, ListCommand::Split] {
        group.bench_function(command.name(), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    let patch = apply_list_command(&mut tree, command, &mut FixedIdGenerator);
                    std::hint::black_box(patch)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_list_commands);
criterion_main!(benches);
