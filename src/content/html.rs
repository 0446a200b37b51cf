use super::{Language, QuizQuestion, SubTopic, Topic, Tutorial};

pub(super) static TUTORIAL: Tutorial = Tutorial {
    language: Language::Html,
    title: "HTML",
    topics: &[INTRODUCTION, ELEMENTS, LINKS],
};

const INTRODUCTION: Topic = Topic {
    slug: "introduction",
    title: "HTML Introduction",
    body: "HTML describes the structure of a web page with nested *elements* written as tags.",
    inshort: Some("HTML is the skeleton of every web page."),
    code: None,
    subtopics: &[SubTopic {
        slug: "basics",
        title: "HTML Basics",
        body: "A document starts with `<!DOCTYPE html>` and wraps everything in `<html>`, \
               with metadata in `<head>` and content in `<body>`.",
        code: Some("<!DOCTYPE html>\n<html>\n  <head><title>Page</title></head>\n  <body>Hello</body>\n</html>"),
    }],
    quiz: &[QuizQuestion {
        question: "Which element holds the visible page content?",
        options: &["<head>", "<body>", "<meta>", "<title>"],
        answer: "<body>",
    }],
};

const ELEMENTS: Topic = Topic {
    slug: "elements",
    title: "HTML Elements",
    body: "An element is a start tag, content and an end tag. Some, like `<br>` and `<img>`, \
           are void and have no content.",
    inshort: None,
    code: None,
    subtopics: &[],
    quiz: &[],
};

const LINKS: Topic = Topic {
    slug: "links",
    title: "HTML Links",
    body: "The `<a>` element creates a hyperlink; its `href` attribute names the destination.",
    inshort: None,
    code: Some("<a href=\"https://example.com\">Visit</a>"),
    subtopics: &[],
    quiz: &[],
};
