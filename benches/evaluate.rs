use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ruletree::{
    ActionExpression, AssignVariable, CompareOp, Comparison, ConditionExpression, DataDef,
    ExecutionState, Expression, Loop, MetadataState, Value,
};

/// A loop over `n` integers whose body copies the item into a variable.
fn build_loop(n: usize) -> (Loop, ExecutionState) {
    let looped = Loop::over("numbers").action(AssignVariable::new("last", "list_item"));
    let items: Vec<Value> = (0..n).map(|i| Value::Int(i as i64)).collect();
    let state = ExecutionState::new().with_variable("numbers", items);
    (looped, state)
}

/// A loop whose body carries `n` leaf actions, plus the matching metadata.
fn build_wide_loop(n: usize) -> (Loop, MetadataState) {
    let mut looped = Loop::over("numbers");
    for i in 0..n {
        looped = looped.action(AssignVariable::new(format!("v{i}"), "list_item"));
    }
    let metadata = MetadataState::new().with_definition("numbers", DataDef::list_of(DataDef::Int));
    (looped, metadata)
}

fn bench_loop_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_execution");

    for &n in &[10, 100, 1000] {
        let (looped, state) = build_loop(n);
        group.bench_function(&format!("{n}_items"), |b| {
            b.iter(|| {
                let mut state = black_box(state.clone());
                looped.execute(&mut state).unwrap();
                state
            });
        });
    }

    group.finish();
}

fn bench_and_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_evaluation");

    for &n in &[5, 20, 50] {
        let mut and_group = ruletree::AndGroup::new();
        let mut state = ExecutionState::new();
        for i in 0..n {
            let path = format!("f{i}");
            and_group = and_group.condition(Comparison::new(path.as_str(), CompareOp::Gte, 1_i64));
            state.set_variable(path, 10_i64);
        }

        group.bench_function(&format!("{n}_conditions"), |b| {
            b.iter(|| {
                let mut state = black_box(state.clone());
                and_group.evaluate(&mut state).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_integrity_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrity_check");

    for &n in &[5, 20, 50] {
        let (looped, metadata) = build_wide_loop(n);
        group.bench_function(&format!("{n}_actions"), |b| {
            b.iter(|| {
                let mut metadata = black_box(metadata.clone());
                looped.check_integrity(&mut metadata)
            });
        });
    }

    group.finish();
}

fn bench_metadata_preparation(c: &mut Criterion) {
    let mut group = c.benchmark_group("metadata_preparation");

    for &n in &[5, 20, 50] {
        let (looped, metadata) = build_wide_loop(n);
        group.bench_function(&format!("{n}_actions_full_walk"), |b| {
            b.iter(|| {
                let mut metadata = black_box(metadata.clone());
                looped.prepare_metadata(&mut metadata, None)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_loop_execution,
    bench_and_evaluation,
    bench_integrity_check,
    bench_metadata_preparation
);
criterion_main!(benches);
