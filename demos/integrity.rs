use ruletree::{AssignVariable, DataDef, Expression, Loop, MetadataState};

fn main() {
    // A deliberately broken tree: the loop shadows an existing variable,
    // and its body reads a selector that does not exist.
    let broken = Loop::over("user.orders")
        .item_name("user")
        .action(AssignVariable::new("total", "user.total"));

    let user = DataDef::map([
        ("age".to_owned(), DataDef::Int),
        (
            "orders".to_owned(),
            DataDef::list_of(DataDef::map([("id".to_owned(), DataDef::String)])),
        ),
    ]);
    let mut metadata = MetadataState::new().with_definition("user", user);

    let violations = broken.check_integrity(&mut metadata);
    if violations.is_empty() {
        println!("tree is valid");
    } else {
        println!("found {} violation(s):", violations.len());
        for violation in &violations {
            println!("  [{}] {}", violation.uuid(), violation.message());
        }
    }

    // The same tree with a non-shadowing item name: only the selector
    // problem remains.
    let fixed = Loop::over("user.orders")
        .item_name("order")
        .action(AssignVariable::new("total", "order.total"));

    let violations = fixed.check_integrity(&mut metadata);
    println!();
    println!("after renaming the item variable:");
    for violation in &violations {
        println!("  [{}] {}", violation.uuid(), violation.message());
    }
}
