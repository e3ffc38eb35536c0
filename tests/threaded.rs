use std::sync::{Arc, Mutex};
use std::thread;

use ruletree::{
    ActionExpression, CompareOp, Comparison, ConditionExpression, EvalError, ExecutionState,
    Expression, Loop, MetadataState, Uuid, Value, ViolationList,
};

#[derive(Debug)]
struct Sum {
    into: Arc<Mutex<i64>>,
    uuid: Uuid,
}

impl Sum {
    fn new() -> (Self, Arc<Mutex<i64>>) {
        let into = Arc::new(Mutex::new(0));
        let action = Self {
            into: Arc::clone(&into),
            uuid: Uuid::new_v4(),
        };
        (action, into)
    }
}

impl Expression for Sum {
    fn id(&self) -> &'static str {
        "test_sum"
    }
    fn label(&self) -> &'static str {
        "Sum the loop item"
    }
    fn uuid(&self) -> Uuid {
        self.uuid
    }
    fn check_integrity(&self, _metadata: &mut MetadataState) -> ViolationList {
        ViolationList::new()
    }
}

impl ActionExpression for Sum {
    fn execute(&self, state: &mut ExecutionState) -> Result<(), EvalError> {
        if let Value::Int(n) = state.get_variable("list_item")? {
            *self.into.lock().unwrap() += n;
        }
        Ok(())
    }
}

#[test]
fn shared_condition_evaluates_across_threads() {
    let condition = Arc::new(Comparison::new("user.age", CompareOp::Gte, 18_i64));

    let mut handles = vec![];
    for age in [15_i64, 18, 25, 70] {
        let condition = Arc::clone(&condition);
        handles.push(thread::spawn(move || {
            let user = Value::Map([("age".to_owned(), Value::Int(age))].into_iter().collect());
            let mut state = ExecutionState::new().with_variable("user", user);
            condition.evaluate(&mut state).unwrap()
        }));
    }

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true]);
}

#[test]
fn shared_loop_with_per_thread_state() {
    let (sum, total) = Sum::new();
    let looped = Arc::new(Loop::over("numbers").action(sum));

    let mut handles = vec![];
    for chunk in [vec![1_i64, 2], vec![3], vec![4, 5, 6]] {
        let looped = Arc::clone(&looped);
        handles.push(thread::spawn(move || {
            let items: Vec<Value> = chunk.into_iter().map(Value::Int).collect();
            let mut state = ExecutionState::new().with_variable("numbers", items);
            looped.execute(&mut state).unwrap();
            assert!(!state.has_variable("list_item"));
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*total.lock().unwrap(), 21);
}
