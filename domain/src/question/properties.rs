//! Property tests for the question aggregate.

use super::entities::{CHOICE_COUNT_RANGE, Question, WEIGHT_RANGE};
use crate::core::error::InvalidOperationError;
use crate::topic::{DEFAULT_MIN_TOPIC_LENGTH, TopicPolicy};
use proptest::prelude::*;

// ==================== Strategies ====================

fn valid_topic() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{3,24}"
}

fn invalid_topic() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,2}"
}

fn choices(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,12}", range)
}

/// Inputs satisfying every construction rule.
fn valid_inputs() -> impl Strategy<Value = (String, Vec<String>, usize, String, u32)> {
    choices(CHOICE_COUNT_RANGE).prop_flat_map(|choices| {
        let count = choices.len();
        (
            ".{1,40}",
            Just(choices),
            0..count,
            valid_topic(),
            WEIGHT_RANGE,
        )
    })
}

fn question() -> impl Strategy<Value = Question> {
    valid_inputs().prop_map(|(body, choices, correct, topic, weight)| {
        Question::new(body, choices, correct, topic, weight).unwrap()
    })
}

fn assert_invariants(q: &Question) {
    assert!(!q.body().is_empty());
    assert!(CHOICE_COUNT_RANGE.contains(&q.choices().len()));
    assert!(q.correct_choice() < q.choices().len());
    assert!((1..=q.max_topics()).contains(&q.topics().len()));
    for (i, topic) in q.topics().iter().enumerate() {
        assert!(q.policy().is_valid(topic));
        assert!(!q.topics()[i + 1..].contains(topic));
    }
    assert!(WEIGHT_RANGE.contains(&q.weight()));
}

proptest! {
    #[test]
    fn construction_with_valid_inputs_holds_invariants(
        (body, choices, correct, topic, weight) in valid_inputs()
    ) {
        let q = Question::new(body.clone(), choices.clone(), correct, topic.clone(), weight).unwrap();
        assert_invariants(&q);
        prop_assert_eq!(q.body(), body.as_str());
        prop_assert_eq!(q.choices(), choices.as_slice());
        prop_assert_eq!(q.topics(), [topic]);
        prop_assert_eq!(q.weight(), weight);
    }

    #[test]
    fn construction_rejects_bad_choice_count(
        choices in prop_oneof![choices(0..=1), choices(9..=16)],
        topic in valid_topic(),
    ) {
        let count = choices.len();
        let err = Question::new("body", choices, 0, topic, 1).unwrap_err();
        prop_assert_eq!(err, InvalidOperationError::ChoiceCountOutOfRange { count });
    }

    #[test]
    fn construction_rejects_bad_correct_choice(
        choices in choices(CHOICE_COUNT_RANGE),
        offset in 0usize..100,
    ) {
        let index = choices.len() + offset;
        let result = Question::new("body", choices, index, "Potions", 1);
        let is_correct_choice_error = matches!(
            result,
            Err(InvalidOperationError::CorrectChoiceOutOfRange { .. })
        );
        prop_assert!(is_correct_choice_error);
    }

    #[test]
    fn construction_rejects_bad_topic_or_weight(
        topic in invalid_topic(),
        weight in prop_oneof![Just(0u32), 16u32..1000],
    ) {
        let bad_topic = Question::new("body", ["a", "b"], 0, topic, 1);
        prop_assert!(bad_topic.is_err());
        let bad_weight = Question::new("body", ["a", "b"], 0, "Potions", weight);
        prop_assert_eq!(bad_weight.unwrap_err(), InvalidOperationError::WeightOutOfRange(weight));
    }

    #[test]
    fn add_then_remove_restores_topics(mut q in question(), topic in valid_topic()) {
        prop_assume!(!q.has_topic(&topic));
        let before = q.topics().to_vec();
        q.add(topic.clone()).unwrap();
        q.remove(&topic).unwrap();
        prop_assert_eq!(q.topics(), before.as_slice());
    }

    #[test]
    fn duplicate_add_leaves_topics_unchanged(mut q in question()) {
        let existing = q.topics()[0].clone();
        let before = q.topics().to_vec();
        prop_assert!(q.add(existing.clone()).is_err());
        prop_assert_eq!(q.topics(), before.as_slice());
        prop_assert_eq!(q.topics().iter().filter(|t| **t == existing).count(), 1);
    }

    #[test]
    fn topic_count_never_exceeds_cap(
        mut q in question(),
        topics in proptest::collection::vec(valid_topic(), 0..12),
    ) {
        for topic in topics {
            let was_full = q.topics().len() == q.max_topics();
            let duplicate = q.has_topic(&topic);
            let result = q.add(topic);
            if was_full && !duplicate {
                prop_assert_eq!(result, Err(InvalidOperationError::TopicLimitReached { max: 5 }));
            }
            prop_assert!(q.topics().len() <= 5);
        }
        assert_invariants(&q);
    }

    #[test]
    fn weight_round_trip(mut q in question(), weight in 0u32..40) {
        let before = q.weight();
        match q.set_weight(weight) {
            Ok(()) => prop_assert_eq!(q.weight(), weight),
            Err(_) => {
                prop_assert!(!WEIGHT_RANGE.contains(&weight));
                prop_assert_eq!(q.weight(), before);
            }
        }
    }

    #[test]
    fn grade_awards_weight_only_for_correct_choice(q in question()) {
        for selected in 0..q.choices().len() {
            let expected = if selected == q.correct_choice() { f64::from(q.weight()) } else { 0.0 };
            prop_assert_eq!(q.grade(selected), expected);
        }
    }

    #[test]
    fn cloned_sequences_do_not_alias(q in question(), extra in valid_topic()) {
        let choices_before = q.choices().to_vec();
        let topics_before = q.topics().to_vec();

        let mut choices = q.choices().to_vec();
        choices.push(extra.clone());
        let mut topics = q.topics().to_vec();
        topics.push(extra);

        prop_assert_eq!(q.choices(), choices_before.as_slice());
        prop_assert_eq!(q.topics(), topics_before.as_slice());
    }

    #[test]
    fn generated_topics_match_default_policy(_seed in 0u8..8) {
        let generator = crate::testing::TopicGenerator::default();
        let policy = TopicPolicy::default();
        prop_assert!(policy.is_valid(&generator.generate_random_valid_topic()));
        let invalid = generator.generate_random_invalid_topic();
        prop_assert!(invalid.chars().count() < DEFAULT_MIN_TOPIC_LENGTH);
    }
}
