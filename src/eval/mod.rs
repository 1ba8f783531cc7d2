//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate_hand(&[Card; 5]) -> HandScore`
//!   `find_best_five_card_hand(&[Card]) -> Result<HandResult, EvalError>`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{
    best_hand_or_invalid, card_value, evaluate_best_hand, evaluate_hand, find_best_five_card_hand,
    EvalError,
};
pub use hand_rank::{describe_hand, hand_category, HandCategory, HandResult, INVALID_HAND};
