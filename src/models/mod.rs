mod pricing;
mod question;
mod session;

pub use pricing::{
    BASE_PRICE, Cents, FLOOR_PRICE, MAX_DISCOUNT, PER_QUESTION_REWARD, QUESTION_COUNT, discount,
    final_price, is_perfect_score,
};
pub use question::{OPTION_COUNT, Question};
pub use session::{Phase, QuizSession};
