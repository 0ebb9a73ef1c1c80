//! Reward and price arithmetic.
//!
//! Money is kept in whole euro cents so the floor price is hit exactly.
//! The reward cap and the floor are derived from the question count, so
//! changing the size of the bank moves all three together.

use std::fmt;

/// A non-negative amount of money in euro cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(pub u32);

impl Cents {
    pub const fn euros(euros: u32) -> Self {
        Self(euros * 100)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (euros, cents) = (self.0 / 100, self.0 % 100);
        if cents == 0 {
            write!(f, "€{}", euros)
        } else {
            write!(f, "€{}.{:02}", euros, cents)
        }
    }
}

/// Number of questions the campaign is priced for.
pub const QUESTION_COUNT: usize = 4;

pub const PER_QUESTION_REWARD: Cents = Cents::euros(15);

pub const BASE_PRICE: Cents = Cents(8999);

pub const MAX_DISCOUNT: Cents = Cents(PER_QUESTION_REWARD.0 * QUESTION_COUNT as u32);

/// Price after a perfect score; never undercut.
pub const FLOOR_PRICE: Cents = Cents(BASE_PRICE.0 - MAX_DISCOUNT.0);

const _: () = assert!(MAX_DISCOUNT.0 < BASE_PRICE.0, "reward cap must leave a positive price");

pub fn discount(correct_count: usize) -> Cents {
    let counted = correct_count.min(QUESTION_COUNT) as u32;
    Cents(PER_QUESTION_REWARD.0 * counted)
}

pub fn final_price(correct_count: usize) -> Cents {
    let reduced = BASE_PRICE.0.saturating_sub(discount(correct_count).0);
    Cents(reduced.max(FLOOR_PRICE.0))
}

pub fn is_perfect_score(correct_count: usize) -> bool {
    correct_count == QUESTION_COUNT
}
