//! Critics judge the transitions an actor makes. The actor proposes actions
//! and is updated from the critique; only the critic side lives here.

mod critic;
mod td_lambda;

pub use critic::{Critic, CritiqueResult};
pub use td_lambda::TdLambdaCritic;
