use thiserror::Error;

use crate::domain::card::{Card, CardParseError, Rank};
use crate::domain::hand::HandScore;

use super::hand_rank::{HandCategory, HandResult};
use super::lookup_tables::{detect_straight, mask_from_cards};

/// Ошибки оценки руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Недостаточно карт для 5-карточной руки: {0}")]
    InsufficientCards(usize),

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),
}

/// Значение карты (2..14) по текстовому виду "Queen of hearts".
///
/// Смотрит только на токен значения, масть не проверяется.
pub fn card_value(card: &str) -> Result<u8, CardParseError> {
    let token = card
        .split_whitespace()
        .next()
        .ok_or_else(|| CardParseError::InvalidCardFormat(card.to_string()))?;
    Rank::parse_token(token)
        .map(Rank::value)
        .ok_or_else(|| CardParseError::InvalidCardFormat(card.to_string()))
}

/// Главная функция: вычислить лучшую 5-карточную руку из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandResult, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    find_best_five_card_hand(&all_cards)
}

/// Перебираем все C(n, 5) комбинаций и выбираем лучшую.
/// При равенстве баллов остаётся первая найденная.
pub fn find_best_five_card_hand(cards: &[Card]) -> Result<HandResult, EvalError> {
    let n = cards.len();
    if n < 5 {
        return Err(EvalError::InsufficientCards(n));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    let mut best: Option<([Card; 5], HandScore)> = None;
    let mut idx = [0usize, 1, 2, 3, 4];

    loop {
        let five = idx.map(|i| cards[i]);
        let score = evaluate_hand(&five);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((five, score));
        }
        if !next_combination(&mut idx, n) {
            break;
        }
    }

    // n >= 5, значит хотя бы одна комбинация была.
    let (mut hand, score) = best.ok_or(EvalError::InsufficientCards(n))?;
    hand.sort_by(|a, b| b.rank.cmp(&a.rank));

    Ok(HandResult {
        best_hand: hand.to_vec(),
        category: score.category(),
        score,
    })
}

/// Мягкий вариант: при нехватке карт вернуть "Invalid Hand" вместо ошибки.
pub fn best_hand_or_invalid(cards: &[Card]) -> HandResult {
    match find_best_five_card_hand(cards) {
        Ok(result) => result,
        Err(err) => {
            log::warn!("hand evaluation degraded to invalid: {err}");
            HandResult::invalid(cards)
        }
    }
}

/// Следующее сочетание индексов в лексикографическом порядке.
/// `false`, если сочетания закончились.
fn next_combination(idx: &mut [usize; 5], n: usize) -> bool {
    let k = idx.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if idx[i] < n - k + i {
            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_hand(hand: &[Card; 5]) -> HandScore {
    // Значения по убыванию.
    let mut values = (*hand).map(|c| c.value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    // Подсчёт мастей и рангов.
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // индексы 0..14, используем 2..14
    for card in hand {
        suit_counts[card.suit.index()] += 1;
        rank_counts[card.value() as usize] += 1;
    }

    let is_flush = suit_counts.iter().any(|&c| c >= 5);
    let straight_high = detect_straight(mask_from_cards(hand)).map(Rank::value);

    // Старший ранг, встречающийся ровно n раз.
    let highest_of_a_kind = |n: u8| (2..=14u8).rev().find(|&v| rank_counts[v as usize] == n);
    let pairs: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&v| rank_counts[v as usize] == 2)
        .collect();

    let score = match (is_flush, straight_high) {
        (true, Some(14)) => HandCategory::RoyalFlush.base_score(),
        (true, Some(high)) => HandCategory::StraightFlush.base_score() + high as u32,
        _ => {
            if let Some(quad) = highest_of_a_kind(4) {
                HandCategory::FourOfAKind.base_score()
                    + quad as u32 * 100
                    + kicker_score(&values, &rank_counts, 1)
            } else if let (Some(trips), Some(pair)) = (highest_of_a_kind(3), highest_of_a_kind(2)) {
                HandCategory::FullHouse.base_score() + trips as u32 * 10 + pair as u32
            } else if is_flush {
                let weights = [100u32, 50, 20, 10, 5];
                HandCategory::Flush.base_score()
                    + values
                        .iter()
                        .zip(weights)
                        .map(|(&v, w)| v as u32 * w)
                        .sum::<u32>()
            } else if let Some(high) = straight_high {
                HandCategory::Straight.base_score() + high as u32
            } else if let Some(trips) = highest_of_a_kind(3) {
                HandCategory::ThreeOfAKind.base_score()
                    + trips as u32 * 100
                    + kicker_score(&values, &rank_counts, 2)
            } else if pairs.len() == 2 {
                // Кикер без множителя: младшая пара (×10) всегда важнее.
                let kicker = values
                    .iter()
                    .find(|&&v| rank_counts[v as usize] == 1)
                    .map_or(0, |&v| v as u32);
                HandCategory::TwoPair.base_score()
                    + pairs[0] as u32 * 100
                    + pairs[1] as u32 * 10
                    + kicker
            } else if let Some(pair) = pairs.first() {
                HandCategory::OnePair.base_score()
                    + *pair as u32 * 100
                    + kicker_score(&values, &rank_counts, 3)
            } else {
                HandCategory::HighCard.base_score() + values[0] as u32
            }
        }
    };

    HandScore(score)
}

/// Очки кикеров: непарные значения по убыванию, первые `needed` штук
/// с множителями 10, 1, 0, ... (множитель делится на 10 нацело).
fn kicker_score(values_desc: &[u8; 5], rank_counts: &[u8; 15], needed: usize) -> u32 {
    let mut multiplier = 10u32;
    let mut score = 0u32;
    for &v in values_desc
        .iter()
        .filter(|&&v| rank_counts[v as usize] == 1)
        .take(needed)
    {
        score += v as u32 * multiplier;
        multiplier /= 10;
    }
    score
}
