mod and;
mod assign;
mod comparison;
mod iterate;
mod sequence;

pub use and::AndGroup;
pub use assign::AssignVariable;
pub use comparison::Comparison;
pub use iterate::Loop;
pub use sequence::ActionSequence;
