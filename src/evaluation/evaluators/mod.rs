mod basic_filter_evaluator;
mod filter_evaluator;

pub use basic_filter_evaluator::BasicFilterEvaluator;
pub use filter_evaluator::{
    ACCEPTANCE_RATE, ACCEPTED, FILLING, FilterEvaluator, FilterEvaluatorExt, MEAN_LOSS,
    MEAN_REJECTED_SCORE, REJECTED,
};
