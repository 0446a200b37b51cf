use super::{Language, QuizQuestion, SubTopic, Topic, Tutorial};

pub(super) static TUTORIAL: Tutorial = Tutorial {
    language: Language::Python,
    title: "Python",
    topics: &[INTRODUCTION, VARIABLES, CONTROL_FLOW],
};

const INTRODUCTION: Topic = Topic {
    slug: "introduction",
    title: "Introduction to Python",
    body: "Python is an interpreted, dynamically typed language known for readable, \
           indentation-based syntax.",
    inshort: Some("Readable syntax, batteries included, runs almost everywhere."),
    code: Some("print(\"Hello, Vidhyardhi!\")"),
    subtopics: &[SubTopic {
        slug: "installation",
        title: "Installing Python",
        body: "Download an installer from python.org or use your system package manager, then \
               check the version with `python3 --version`.",
        code: None,
    }],
    quiz: &[QuizQuestion {
        question: "How does Python mark a block of code?",
        options: &["Braces", "Indentation", "BEGIN/END", "Semicolons"],
        answer: "Indentation",
    }],
};

const VARIABLES: Topic = Topic {
    slug: "variables",
    title: "Variables & Types",
    body: "Names are bound to objects by assignment; the object, not the name, carries the type.",
    inshort: None,
    code: Some("age = 21\nname = \"Ravi\"\nscores = [90, 85, 77]"),
    subtopics: &[],
    quiz: &[],
};

const CONTROL_FLOW: Topic = Topic {
    slug: "control-flow",
    title: "Control Flow",
    body: "`if`/`elif`/`else` choose between branches; `for` iterates over any iterable and \
           `while` loops on a condition.",
    inshort: None,
    code: Some("for n in range(3):\n    if n % 2 == 0:\n        print(n, \"is even\")"),
    subtopics: &[],
    quiz: &[],
};
