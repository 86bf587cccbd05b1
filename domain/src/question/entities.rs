//! Question aggregate

use crate::core::error::{InvalidOperationError, Result};
use crate::topic::TopicPolicy;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

/// Allowed number of choices per question.
pub const CHOICE_COUNT_RANGE: RangeInclusive<usize> = 2..=8;

/// Allowed question weight.
pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=15;

/// A multiple-choice question (Aggregate Root)
///
/// Holds the prompt, the choices, the index of the correct choice, the
/// topics it belongs to and the weight awarded for a correct answer.
///
/// All fields are private. Body, choices and correct choice are fixed at
/// construction; topics and weight change only through [`add`](Self::add),
/// [`remove`](Self::remove) and [`set_weight`](Self::set_weight), each of
/// which validates before mutating so a failed call leaves the question
/// untouched.
///
/// # Example
///
/// ```
/// use quiz_domain::Question;
///
/// let mut q = Question::new(
///     "What is the name of Harry Potter's pet owl?",
///     ["Scabbers", "Hedwig", "Crookshanks", "Fawkes"],
///     1,
///     "Harry Potter Trivia",
///     10,
/// )?;
///
/// q.add("Magical Creatures")?;
/// assert_eq!(q.topics().len(), 2);
/// assert_eq!(q.grade(1), 10.0);
/// assert_eq!(q.grade(3), 0.0);
/// # Ok::<(), quiz_domain::InvalidOperationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Question {
    body: String,
    choices: Vec<String>,
    correct_choice: usize,
    topics: Vec<String>,
    weight: u32,
    policy: TopicPolicy,
}

impl Question {
    /// Create a question under the default [`TopicPolicy`].
    pub fn new<I>(
        body: impl Into<String>,
        choices: I,
        correct_choice: usize,
        topic: impl Into<String>,
        weight: u32,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::with_policy(
            TopicPolicy::default(),
            body,
            choices,
            correct_choice,
            topic,
            weight,
        )
    }

    /// Create a question whose topics are checked against `policy`.
    ///
    /// Inputs are validated in order: body, choice count, correct choice,
    /// seed topic, weight. The first violation is returned.
    pub fn with_policy<I>(
        policy: TopicPolicy,
        body: impl Into<String>,
        choices: I,
        correct_choice: usize,
        topic: impl Into<String>,
        weight: u32,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let body = body.into();
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let topic = topic.into();

        Self::validate(&policy, &body, &choices, correct_choice, &topic, weight)
            .map_err(rejected)?;

        debug!(choices = choices.len(), correct_choice, weight, "question created");
        Ok(Self {
            body,
            choices,
            correct_choice,
            topics: vec![topic],
            weight,
            policy,
        })
    }

    fn validate(
        policy: &TopicPolicy,
        body: &str,
        choices: &[String],
        correct_choice: usize,
        topic: &str,
        weight: u32,
    ) -> Result<()> {
        if body.is_empty() {
            return Err(InvalidOperationError::EmptyBody);
        }
        if !CHOICE_COUNT_RANGE.contains(&choices.len()) {
            return Err(InvalidOperationError::ChoiceCountOutOfRange {
                count: choices.len(),
            });
        }
        if correct_choice >= choices.len() {
            return Err(InvalidOperationError::CorrectChoiceOutOfRange {
                index: correct_choice,
                count: choices.len(),
            });
        }
        policy.check(topic)?;
        check_weight(weight)
    }

    // ==================== Topics ====================

    /// Add a topic.
    ///
    /// Fails if the topic is already present, the question is already at
    /// [`max_topics`](Self::max_topics), or the topic is too short.
    pub fn add(&mut self, topic: impl Into<String>) -> Result<()> {
        let topic = topic.into();
        if self.has_topic(&topic) {
            return Err(rejected(InvalidOperationError::DuplicateTopic(topic)));
        }
        if self.topics.len() >= self.max_topics() {
            return Err(rejected(InvalidOperationError::TopicLimitReached {
                max: self.max_topics(),
            }));
        }
        self.policy.check(&topic).map_err(rejected)?;

        debug!(topic = %topic, "topic added");
        self.topics.push(topic);
        Ok(())
    }

    /// Remove a topic. The last remaining topic cannot be removed.
    pub fn remove(&mut self, topic: &str) -> Result<()> {
        let Some(index) = self.topics.iter().position(|t| t == topic) else {
            return Err(rejected(InvalidOperationError::UnknownTopic(
                topic.to_string(),
            )));
        };
        if self.topics.len() == 1 {
            return Err(rejected(InvalidOperationError::LastTopic(
                topic.to_string(),
            )));
        }

        self.topics.remove(index);
        debug!(topic, "topic removed");
        Ok(())
    }

    /// Whether `topic` is one of this question's topics (case-sensitive).
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    // ==================== Weight & grading ====================

    /// Replace the weight. Must be within 1..=15.
    pub fn set_weight(&mut self, weight: u32) -> Result<()> {
        check_weight(weight).map_err(rejected)?;
        debug!(from = self.weight, to = weight, "weight changed");
        self.weight = weight;
        Ok(())
    }

    /// Points awarded for answering with `selected_choice`.
    ///
    /// Returns the weight for the correct choice and `0.0` for anything else,
    /// including indices outside the choice list.
    pub fn grade(&self, selected_choice: usize) -> f64 {
        let correct = selected_choice == self.correct_choice;
        trace!(selected_choice, correct, "grading answer");
        if correct { f64::from(self.weight) } else { 0.0 }
    }

    // ==================== Accessors ====================

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_choice(&self) -> usize {
        self.correct_choice
    }

    /// Topics in insertion order.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Maximum number of topics this question may carry (always 5).
    pub fn max_topics(&self) -> usize {
        self.policy.max_topics()
    }

    pub fn policy(&self) -> &TopicPolicy {
        &self.policy
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.body)?;
        for (i, choice) in self.choices.iter().enumerate() {
            writeln!(f, "  [{}] {}", i, choice)?;
        }
        Ok(())
    }
}

fn check_weight(weight: u32) -> Result<()> {
    if WEIGHT_RANGE.contains(&weight) {
        Ok(())
    } else {
        Err(InvalidOperationError::WeightOutOfRange(weight))
    }
}

fn rejected(error: InvalidOperationError) -> InvalidOperationError {
    debug!(rule = error.rule(), %error, "question operation rejected");
    error
}
