#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::content::QuizQuestion;

/// Submitting before choosing an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Please select an answer!")]
    NoSelection,
}

/// Result of submitting the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { answer: &'static str },
}

/// Progress through one topic's quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    questions: &'static [QuizQuestion],
    index: usize,
    selected: Option<&'static str>,
    answered: bool,
    score: usize,
}

impl QuizState {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            selected: None,
            answered: false,
            score: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Choose an option. Ignored once the current question is answered.
    pub fn select(&mut self, option: &'static str) {
        if !self.answered && !self.is_complete() {
            self.selected = Some(option);
        }
    }

    /// Lock in the selected option and score it.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoSelection`] when nothing is selected.
    pub fn submit(&mut self) -> Result<Feedback, QuizError> {
        let (Some(question), Some(selected)) = (self.current(), self.selected) else {
            return Err(QuizError::NoSelection);
        };
        if self.answered {
            return Ok(Self::feedback(question, selected));
        }
        self.answered = true;
        if selected == question.answer {
            self.score += 1;
        }
        Ok(Self::feedback(question, selected))
    }

    /// Feedback for the answered question, if any.
    pub fn feedback_for_current(&self) -> Option<Feedback> {
        match (self.answered, self.current(), self.selected) {
            (true, Some(question), Some(selected)) => Some(Self::feedback(question, selected)),
            _ => None,
        }
    }

    fn feedback(question: &QuizQuestion, selected: &str) -> Feedback {
        if selected == question.answer {
            Feedback::Correct
        } else {
            Feedback::Incorrect { answer: question.answer }
        }
    }

    pub fn next(&mut self) {
        if self.is_complete() {
            return;
        }
        self.index += 1;
        self.selected = None;
        self.answered = false;
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.questions);
    }

    /// Score as a rounded percentage of the question count; 0 for an empty quiz.
    pub fn percentage(&self) -> usize {
        let len = self.questions.len();
        if len == 0 {
            return 0;
        }
        // Half-up rounding in integer arithmetic.
        (self.score * 200 + len) / (2 * len)
    }

    pub fn verdict(&self) -> &'static str {
        match self.percentage() {
            80.. => "Excellent work!",
            60.. => "Good job!",
            _ => "Keep practicing!",
        }
    }
}
