mod bank;

pub use bank::{BankError, QuestionBank};
