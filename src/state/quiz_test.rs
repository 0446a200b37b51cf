use super::*;

static QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "2 + 2?",
        options: &["3", "4", "5"],
        answer: "4",
    },
    QuizQuestion {
        question: "Capital of France?",
        options: &["Paris", "Rome"],
        answer: "Paris",
    },
    QuizQuestion {
        question: "Rust's package manager?",
        options: &["pip", "cargo", "npm"],
        answer: "cargo",
    },
];

// =============================================================
// Answering
// =============================================================

#[test]
fn submit_without_selection_is_rejected() {
    let mut quiz = QuizState::new(&QUESTIONS);
    assert_eq!(quiz.submit(), Err(QuizError::NoSelection));
    assert_eq!(QuizError::NoSelection.to_string(), "Please select an answer!");
    assert!(!quiz.is_answered());
}

#[test]
fn correct_answer_increments_score() {
    let mut quiz = QuizState::new(&QUESTIONS);
    quiz.select("4");
    assert_eq!(quiz.submit(), Ok(Feedback::Correct));
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.feedback_for_current(), Some(Feedback::Correct));
}

#[test]
fn wrong_answer_reports_the_right_one() {
    let mut quiz = QuizState::new(&QUESTIONS);
    quiz.select("5");
    assert_eq!(quiz.submit(), Ok(Feedback::Incorrect { answer: "4" }));
    assert_eq!(quiz.score(), 0);
}

#[test]
fn selection_is_locked_after_submit() {
    let mut quiz = QuizState::new(&QUESTIONS);
    quiz.select("4");
    quiz.submit().unwrap();
    quiz.select("3");
    assert_eq!(quiz.selected(), Some("4"));
    // Resubmitting does not score twice.
    quiz.submit().unwrap();
    assert_eq!(quiz.score(), 1);
}

#[test]
fn next_clears_selection_and_advances() {
    let mut quiz = QuizState::new(&QUESTIONS);
    quiz.select("4");
    quiz.submit().unwrap();
    quiz.next();
    assert_eq!(quiz.index(), 1);
    assert_eq!(quiz.selected(), None);
    assert!(!quiz.is_answered());
    assert_eq!(quiz.current().map(|q| q.question), Some("Capital of France?"));
}

// =============================================================
// Completion
// =============================================================

fn play(quiz: &mut QuizState, picks: &[&'static str]) {
    for pick in picks {
        quiz.select(pick);
        quiz.submit().unwrap();
        quiz.next();
    }
}

#[test]
fn completes_after_last_question() {
    let mut quiz = QuizState::new(&QUESTIONS);
    play(&mut quiz, &["4", "Paris", "cargo"]);
    assert!(quiz.is_complete());
    assert!(quiz.current().is_none());
    assert_eq!(quiz.percentage(), 100);
    assert_eq!(quiz.verdict(), "Excellent work!");
    quiz.next();
    assert_eq!(quiz.index(), 3);
}

#[test]
fn percentage_rounds_and_picks_verdict() {
    let mut quiz = QuizState::new(&QUESTIONS);
    play(&mut quiz, &["4", "Paris", "pip"]);
    assert_eq!(quiz.percentage(), 67);
    assert_eq!(quiz.verdict(), "Good job!");

    let mut quiz = QuizState::new(&QUESTIONS);
    play(&mut quiz, &["4", "Rome", "pip"]);
    assert_eq!(quiz.percentage(), 33);
    assert_eq!(quiz.verdict(), "Keep practicing!");
}

#[test]
fn empty_quiz_is_complete_with_zero_percent() {
    let quiz = QuizState::new(&[]);
    assert!(quiz.is_complete());
    assert_eq!(quiz.percentage(), 0);
    assert_eq!(quiz.verdict(), "Keep practicing!");
}

#[test]
fn restart_resets_everything() {
    let mut quiz = QuizState::new(&QUESTIONS);
    play(&mut quiz, &["4", "Paris"]);
    quiz.restart();
    assert_eq!(quiz, QuizState::new(&QUESTIONS));
}
