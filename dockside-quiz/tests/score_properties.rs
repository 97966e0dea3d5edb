//! Property tests for scoring

use dockside_quiz::{grade, AnswerSheet, QuestionBank};
use proptest::prelude::*;

proptest! {
    /// Property: score equals the number of questions answered correctly,
    /// whichever questions those are
    #[test]
    fn prop_score_counts_correct_subset(mask in prop::collection::vec(any::<bool>(), 25)) {
        let bank = QuestionBank::default();
        let sheet = AnswerSheet::from_choices(bank.iter().zip(&mask).map(|(q, &right)| {
            let idx = if right { q.answer } else { (q.answer + 1) % 4 };
            (q.id, idx as i64)
        }));

        let expected = mask.iter().filter(|&&right| right).count();
        let score = grade(&bank, &sheet);
        prop_assert_eq!(score.correct, expected);
        prop_assert_eq!(score.total, 25);
        prop_assert_eq!(score.is_perfect(), expected == 25);
    }

    /// Property: answering only some questions never scores the rest
    #[test]
    fn prop_unanswered_never_counts(answered in prop::collection::vec(any::<bool>(), 25)) {
        let bank = QuestionBank::default();
        let sheet = AnswerSheet::from_choices(
            bank.iter()
                .zip(&answered)
                .filter(|(_, &keep)| keep)
                .map(|(q, _)| (q.id, q.answer as i64)),
        );

        let expected = answered.iter().filter(|&&keep| keep).count();
        prop_assert_eq!(grade(&bank, &sheet).correct, expected);
    }

    /// Property: wrong or out-of-range indices never score
    #[test]
    fn prop_wrong_indices_score_zero(offsets in prop::collection::vec(1i64..1000, 25)) {
        let bank = QuestionBank::default();
        let sheet = AnswerSheet::from_choices(
            bank.iter().zip(&offsets).map(|(q, &off)| (q.id, q.answer as i64 + off)),
        );
        prop_assert_eq!(grade(&bank, &sheet).correct, 0);
    }
}
