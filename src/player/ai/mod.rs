pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod random;

pub use alpha_beta::{AlphaBetaAI, SearchResult};
pub use config::AIConfig;
pub use evaluator::{Evaluator, EvaluatorKind};
pub use random::RandomAI;
