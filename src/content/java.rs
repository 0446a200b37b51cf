use super::{Language, QuizQuestion, SubTopic, Topic, Tutorial};

pub(super) static TUTORIAL: Tutorial = Tutorial {
    language: Language::Java,
    title: "Java",
    topics: &[HISTORY, OVERVIEW, DATATYPES],
};

const HISTORY: Topic = Topic {
    slug: "history",
    title: "History & Evolution",
    body: "Java grew out of a 1991 Sun Microsystems project to build software for consumer \
           devices. Its designers wanted a language that was **portable**, **secure** and \
           familiar to C and C++ programmers.",
    inshort: Some("Java was designed at Sun in the early 1990s to run the same program on any device."),
    code: None,
    subtopics: &[
        SubTopic {
            slug: "lineage",
            title: "Java's Lineage",
            body: "Java inherits its syntax from C and its object model from C++, while leaving \
                   out features such as pointers and multiple inheritance of classes.",
            code: None,
        },
        SubTopic {
            slug: "creation",
            title: "The Creation of Java",
            body: "James Gosling, Patrick Naughton, Chris Warth, Ed Frank and Mike Sheridan \
                   started the language as *Oak* in 1991; it was renamed Java in 1995.",
            code: None,
        },
        SubTopic {
            slug: "internet",
            title: "How Java Changed the Internet",
            body: "Applets let browsers download and run small programs safely, which made \
                   portability and security first-class concerns for web software.",
            code: None,
        },
        SubTopic {
            slug: "bytecode",
            title: "Java's Magic: The Bytecode",
            body: "The compiler emits *bytecode*, a compact instruction set executed by the \
                   Java Virtual Machine. Only the JVM has to be ported to a new platform.",
            code: Some("javac Hello.java   # produces Hello.class (bytecode)\njava Hello         # the JVM runs it"),
        },
        SubTopic {
            slug: "buzzwords",
            title: "The Java Buzzwords",
            body: "Simple, secure, portable, object-oriented, robust, multithreaded, \
                   architecture-neutral, interpreted, high performance, distributed, dynamic.",
            code: None,
        },
        SubTopic {
            slug: "evolution",
            title: "The Evolution of Java",
            body: "Major releases added generics (5), lambdas and streams (8), modules (9), \
                   and records and pattern matching in later long-term-support versions.",
            code: None,
        },
        SubTopic {
            slug: "culture",
            title: "A Culture of Innovation",
            body: "The Java Community Process lets vendors and users propose and review changes \
                   to the language and its libraries.",
            code: None,
        },
    ],
    quiz: &[
        QuizQuestion {
            question: "What was Java originally called?",
            options: &["Oak", "Pine", "Green", "Coffee"],
            answer: "Oak",
        },
        QuizQuestion {
            question: "What does the Java compiler produce?",
            options: &["Machine code", "Bytecode", "Assembly", "JavaScript"],
            answer: "Bytecode",
        },
    ],
};

const OVERVIEW: Topic = Topic {
    slug: "overview",
    title: "An Overview of Java",
    body: "Every Java program is built from **classes**. Execution starts in a `main` method \
           declared `public static void main(String[] args)`.",
    inshort: Some("Java programs are collections of classes; `main` is the entry point."),
    code: None,
    subtopics: &[
        SubTopic {
            slug: "oop",
            title: "Object-Oriented Programming",
            body: "Encapsulation, inheritance and polymorphism are the three principles Java's \
                   object model is built on.",
            code: None,
        },
        SubTopic {
            slug: "simple",
            title: "A First Simple Program",
            body: "Save the class below as `Example.java`, compile it with `javac`, and run it \
                   with `java Example`.",
            code: Some(
                "class Example {\n    public static void main(String[] args) {\n        System.out.println(\"This is a simple Java program.\");\n    }\n}",
            ),
        },
    ],
    quiz: &[QuizQuestion {
        question: "Which method does the JVM call to start a program?",
        options: &["start", "run", "main", "init"],
        answer: "main",
    }],
};

const DATATYPES: Topic = Topic {
    slug: "datatypes",
    title: "Data Types & Variables",
    body: "Java is *strongly typed*: every variable and expression has a type checked at \
           compile time.",
    inshort: None,
    code: None,
    subtopics: &[
        SubTopic {
            slug: "primitive",
            title: "Primitive Data Types",
            body: "`byte`, `short`, `int`, `long`, `float`, `double`, `char` and `boolean`.",
            code: None,
        },
        SubTopic {
            slug: "variables",
            title: "Declaring Variables",
            body: "A declaration names a type, then one or more identifiers with optional \
                   initializers.",
            code: Some("int count = 3;\ndouble ratio = 0.75, limit;"),
        },
        SubTopic {
            slug: "typecasting",
            title: "Type Casting",
            body: "Widening conversions happen automatically; narrowing needs an explicit cast \
                   and may lose information.",
            code: Some("int i = 257;\nbyte b = (byte) i; // b == 1"),
        },
    ],
    quiz: &[
        QuizQuestion {
            question: "How many primitive types does Java have?",
            options: &["6", "7", "8", "9"],
            answer: "8",
        },
        QuizQuestion {
            question: "Which conversion needs an explicit cast?",
            options: &["int to long", "byte to int", "double to int", "char to int"],
            answer: "double to int",
        },
    ],
};
