pub mod actor_critic;
mod value_function;

pub use value_function::{ConstantValueFunction, ValueFunction, ValueFunctionInitialization};
