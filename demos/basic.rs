use ruletree::{
    ActionExpression, AndGroup, AssignVariable, CompareOp, Comparison, ConditionExpression,
    ExecutionState, Loop, Value,
};

fn main() {
    // Gate: the user must be an adult with an active account.
    let gate = AndGroup::new()
        .condition(Comparison::new("user.age", CompareOp::Gte, 18_i64))
        .condition(Comparison::new("user.status", CompareOp::Eq, "active"));

    // Body: walk the user's orders, remembering the last order id seen.
    let body = Loop::over("user.orders")
        .item_name("order")
        .action(AssignVariable::new("last_order_id", "order.id"));

    let order = |id: &str| {
        Value::Map(
            [("id".to_owned(), Value::from(id))]
                .into_iter()
                .collect(),
        )
    };
    let user = Value::Map(
        [
            ("age".to_owned(), Value::Int(34)),
            ("status".to_owned(), Value::from("active")),
            (
                "orders".to_owned(),
                Value::List(vec![order("ord-1"), order("ord-2"), order("ord-3")]),
            ),
        ]
        .into_iter()
        .collect(),
    );

    let mut state = ExecutionState::new().with_variable("user", user);

    let fired = gate.evaluate(&mut state).expect("conditions should evaluate");
    println!("conditions passed: {fired}");

    if fired {
        body.execute(&mut state).expect("loop should execute");
        let last = state
            .get_variable("last_order_id")
            .expect("assigned inside the loop");
        println!("last order id: {last}");
        println!(
            "loop item still in scope: {}",
            state.has_variable("order")
        );
    }
}
