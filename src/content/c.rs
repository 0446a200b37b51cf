use super::{Language, QuizQuestion, SubTopic, Topic, Tutorial};

pub(super) static TUTORIAL: Tutorial = Tutorial {
    language: Language::C,
    title: "C Language",
    topics: &[INTRODUCTION, OPERATORS, POINTERS],
};

const INTRODUCTION: Topic = Topic {
    slug: "introduction",
    title: "Introduction to C",
    body: "C is a compiled, procedural language created by Dennis Ritchie at Bell Labs in 1972 \
           to write the UNIX operating system.",
    inshort: Some("Small, fast, close to the hardware."),
    code: Some("#include <stdio.h>\n\nint main(void) {\n    printf(\"Hello, World!\\n\");\n    return 0;\n}"),
    subtopics: &[SubTopic {
        slug: "structure",
        title: "Structure of a C Program",
        body: "Preprocessor directives, global declarations, then functions; execution begins in `main`.",
        code: None,
    }],
    quiz: &[QuizQuestion {
        question: "Who created C?",
        options: &["Bjarne Stroustrup", "Dennis Ritchie", "James Gosling", "Guido van Rossum"],
        answer: "Dennis Ritchie",
    }],
};

const OPERATORS: Topic = Topic {
    slug: "operators",
    title: "Operators",
    body: "Arithmetic, relational, logical, bitwise and assignment operators, evaluated by \
           precedence and associativity.",
    inshort: None,
    code: None,
    subtopics: &[],
    quiz: &[],
};

const POINTERS: Topic = Topic {
    slug: "pointers",
    title: "Pointers",
    body: "A pointer holds the address of another object. `&` takes an address and `*` \
           dereferences it.",
    inshort: None,
    code: Some("int x = 10;\nint *p = &x;\n*p = 20; /* x is now 20 */"),
    subtopics: &[],
    quiz: &[QuizQuestion {
        question: "Which operator yields the address of a variable?",
        options: &["*", "&", "->", "%"],
        answer: "&",
    }],
};
