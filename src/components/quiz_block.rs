//! Multiple-choice quiz widget at the end of a tutorial topic.

use leptos::prelude::*;

use crate::content::QuizQuestion;
use crate::state::quiz::{Feedback, QuizState};

#[component]
pub fn QuizBlock(questions: &'static [QuizQuestion]) -> impl IntoView {
    let quiz = RwSignal::new(QuizState::new(questions));
    let notice = RwSignal::new(None::<String>);
    let fullscreen = RwSignal::new(false);

    let on_submit = move |_: leptos::ev::MouseEvent| match quiz.try_update(QuizState::submit) {
        Some(Err(err)) => notice.set(Some(err.to_string())),
        _ => notice.set(None),
    };
    let on_next = move |_: leptos::ev::MouseEvent| quiz.update(QuizState::next);
    let on_restart = move |_: leptos::ev::MouseEvent| {
        notice.set(None);
        quiz.update(QuizState::restart);
    };
    let toggle_fullscreen = move |_: leptos::ev::MouseEvent| fullscreen.update(|f| *f = !*f);

    let question_view = move || {
        let state = quiz.get();
        let Some(question) = state.current() else {
            return view! {
                <div class="quiz-header">
                    <h2>"Quiz Complete!"</h2>
                    <div class="score-badge">{format!("{}/{}", state.index(), state.len())}</div>
                </div>
                <div class="result-section">
                    <div class="score-circle">
                        <span class="score-text">{format!("{}/{}", state.score(), state.len())}</span>
                        <span class="percentage">{format!("{}%", state.percentage())}</span>
                    </div>
                    <div class="result-message">{state.verdict()}</div>
                </div>
            }
                .into_any();
        };

        let answered = state.is_answered();
        let selected = state.selected();
        let options = question
            .options
            .iter()
            .map(|&option| {
                let is_selected = selected == Some(option);
                let is_correct = option == question.answer;
                view! {
                    <div
                        class="option-box"
                        class:selected=is_selected
                        class:correct={answered && is_correct}
                        class:wrong={answered && is_selected && !is_correct}
                        on:click=move |_| quiz.update(|q| q.select(option))
                    >
                        <span class="option-text">{option}</span>
                    </div>
                }
            })
            .collect_view();

        let feedback = state.feedback_for_current().map(|fb| match fb {
            Feedback::Correct => view! { <div class="feedback correct">"Correct! Well done!"</div> }.into_any(),
            Feedback::Incorrect { answer } => view! {
                <div class="feedback wrong">"Incorrect. The correct answer is: " <strong>{answer}</strong></div>
            }
                .into_any(),
        });

        let action = if !answered {
            view! {
                <button class="btn submit" class:disabled=selected.is_none() on:click=on_submit>
                    {if selected.is_none() { "Select Answer" } else { "Submit Answer" }}
                </button>
            }
                .into_any()
        } else {
            let label = if state.is_last() { "Finish Quiz" } else { "Next Question" };
            view! { <button class="btn next" on:click=on_next>{label}</button> }.into_any()
        };

        view! {
            <div class="quiz-header">
                <h2>"Quiz Time"</h2>
                <div class="score-badge">{format!("Question {}/{}", state.index() + 1, state.len())}</div>
            </div>
            <div class="question-section">
                <h3>{format!("Q{}. {}", state.index() + 1, question.question)}</h3>
            </div>
            <div class="options-section">{options}</div>
            <div class="button-row">{action}</div>
            {feedback}
        }
            .into_any()
    };

    view! {
        <Show when=move || !questions.is_empty()>
            <div class="quiz-container" class:fullscreen=move || fullscreen.get()>
                <div class="quiz-box">
                    {question_view}
                    <Show when=move || notice.get().is_some()>
                        <p class="quiz-notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="button-row">
                        <button class="btn restart" on:click=on_restart>"Restart"</button>
                        <button class="btn fullscreen" on:click=toggle_fullscreen>
                            {move || if fullscreen.get() { "Exit Fullscreen" } else { "Fullscreen" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
