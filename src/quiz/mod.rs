//! Question generation, answer checking, and adaptive selection.

pub mod checker;
pub mod question;
pub mod run;
pub mod sampler;

pub use checker::{check_answer, normalize};
pub use question::{make_bone_question, make_nerve_question, make_review_question, CheckKind, Question};
pub use run::{QuizMode, QuizRun, RunSummary};
pub use sampler::{pick_weighted, weighted_random_select, wrong_weights, BoneWeight};
