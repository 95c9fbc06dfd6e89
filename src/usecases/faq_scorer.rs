//! Keyword relevance scoring between a free-text query and the FAQ list.

use crate::domain::Faq;

/// Minimum score for an answer to be offered.
pub const MIN_SCORE: u32 = 2;

/// Prepended to every FAQ answer.
pub const FAQ_MARKER: &str = "💡 ";

const QUESTION_HIT: u32 = 10;
const ANSWER_HIT: u32 = 5;
const WORD_HIT: u32 = 1;

/// Score of `faq` against an already lowercased `query`.
///
/// +10 when the question contains the whole query, +5 when the answer does,
/// +1 for every query word longer than two characters that is also a word of the FAQ.
pub fn score(query: &str, faq: &Faq) -> u32 {
    let question = faq.question.to_lowercase();
    let answer = faq.answer.to_lowercase();
    let mut total = 0;

    if question.contains(query) {
        total += QUESTION_HIT;
    }
    if answer.contains(query) {
        total += ANSWER_HIT;
    }

    let faq_words: Vec<&str> = question
        .split_whitespace()
        .chain(answer.split_whitespace())
        .collect();
    total += query
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && faq_words.contains(w))
        .count() as u32
        * WORD_HIT;

    total
}

/// Best FAQ for `query`. Earliest entry wins ties.
pub fn best_match<'a>(query: &str, faqs: &'a [Faq]) -> Option<(&'a Faq, u32)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let mut best: Option<(&Faq, u32)> = None;
    for faq in faqs {
        let s = score(&query, faq);
        if best.is_none_or(|(_, top)| s > top) {
            best = Some((faq, s));
        }
    }
    best
}

/// Marked answer of the best FAQ scoring at least [`MIN_SCORE`].
pub fn answer(query: &str, faqs: &[Faq]) -> Option<String> {
    best_match(query, faqs)
        .filter(|(_, s)| *s >= MIN_SCORE)
        .map(|(faq, _)| format!("{}{}", FAQ_MARKER, faq.answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(q: &str, a: &str) -> Faq {
        Faq {
            question: q.into(),
            answer: a.into(),
        }
    }

    #[test]
    fn test_score_components() {
        let f = faq("Do you accept walk-ins?", "Yes, walk-ins are welcome when a chair is free.");
        assert_eq!(score("walk-ins", &f), 10 + 5 + 1);
        // "you" and "accept" are FAQ words, "do" is too short, "cards" absent.
        assert_eq!(score("do you accept cards", &f), 2);
        assert_eq!(score("parking", &f), 0);
    }

    #[test]
    fn test_verbatim_question_adds_ten() {
        let query = "gift cards";
        let without = faq("Do you sell vouchers?", "Yes, at the front desk.");
        let with = faq("Do you sell vouchers? gift cards", "Yes, at the front desk.");
        assert!(score(query, &with) >= score(query, &without) + 10);
    }

    #[test]
    fn test_answer_threshold_and_marker() {
        let faqs = vec![
            faq("Is there parking?", "Free parking behind the shop."),
            faq("Do you take cards?", "We accept all major cards."),
        ];
        assert_eq!(
            answer("Is there parking nearby", &faqs).as_deref(),
            Some("💡 Free parking behind the shop.")
        );
        assert!(answer("tattoo", &faqs).is_none());
        assert!(answer("", &faqs).is_none());
    }

    #[test]
    fn test_ties_keep_first() {
        let faqs = vec![
            faq("cancel policy", "First answer"),
            faq("cancel policy", "Second answer"),
        ];
        let (best, s) = best_match("cancel policy", &faqs).unwrap();
        assert_eq!(best.answer, "First answer");
        assert!(s >= MIN_SCORE);
    }

    #[test]
    fn test_single_word_hit_is_not_enough() {
        let faqs = vec![faq("What payment methods?", "Cash only.")];
        assert_eq!(best_match("cash", &faqs).map(|(_, s)| s), Some(6));
        assert!(answer("pay with cash?", &faqs).is_none());
    }
}
