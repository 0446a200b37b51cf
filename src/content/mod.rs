//! Compiled-in tutorial catalog for the language pages.
//!
//! DESIGN
//! ======
//! Content is keyed by stable slugs rather than display titles, and lookups
//! return an explicit `TopicLookup::NotFound` instead of an empty record, so a
//! bad URL renders a message instead of a blank or crashing page.


mod c;
mod html;
mod java;
mod python;

/// Tutorial languages with a nested topic route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
    C,
    Html,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::Java, Self::Python, Self::C, Self::Html];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::C => "c",
            Self::Html => "html",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.slug() == slug)
    }

    pub fn tutorial(self) -> &'static Tutorial {
        match self {
            Self::Java => &java::TUTORIAL,
            Self::Python => &python::TUTORIAL,
            Self::C => &c::TUTORIAL,
            Self::Html => &html::TUTORIAL,
        }
    }
}

/// One multiple-choice quiz question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

/// A section nested under a topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubTopic {
    pub slug: &'static str,
    pub title: &'static str,
    /// Markdown body.
    pub body: &'static str,
    pub code: Option<&'static str>,
}

/// A top-level tutorial topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topic {
    pub slug: &'static str,
    pub title: &'static str,
    /// Markdown body.
    pub body: &'static str,
    /// One-paragraph recap shown under the body.
    pub inshort: Option<&'static str>,
    pub code: Option<&'static str>,
    pub subtopics: &'static [SubTopic],
    pub quiz: &'static [QuizQuestion],
}

impl Topic {
    pub fn subtopic(&self, slug: &str) -> Option<&'static SubTopic> {
        self.subtopics.iter().find(|s| s.slug == slug)
    }
}

/// All topics for one language, in sidebar order.
#[derive(Debug, PartialEq, Eq)]
pub struct Tutorial {
    pub language: Language,
    pub title: &'static str,
    pub topics: &'static [Topic],
}

/// Result of resolving a `slug[/subslug]` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopicLookup {
    Topic(&'static Topic),
    SubTopic { topic: &'static Topic, subtopic: &'static SubTopic },
    /// Nothing matches; `key` is the slug path that was requested.
    NotFound { key: String },
}

impl Tutorial {
    /// The topic a bare `/languages/<lang>` URL redirects to.
    pub fn default_topic(&self) -> Option<&'static Topic> {
        self.topics.first()
    }

    pub fn topic(&self, slug: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.slug == slug)
    }

    /// Resolve a slug and optional sub-slug. The sub-slug must belong to the slug's topic.
    pub fn lookup(&self, slug: &str, subslug: Option<&str>) -> TopicLookup {
        let not_found = || TopicLookup::NotFound {
            key: subslug.map_or_else(|| slug.to_owned(), |sub| format!("{slug}/{sub}")),
        };
        let Some(topic) = self.topic(slug) else {
            return not_found();
        };
        match subslug {
            None => TopicLookup::Topic(topic),
            Some(sub) => topic
                .subtopic(sub)
                .map_or_else(not_found, |subtopic| TopicLookup::SubTopic { topic, subtopic }),
        }
    }

    /// Topics whose title contains `query`, case-insensitively. Blank queries match everything.
    pub fn search(&self, query: &str) -> Vec<&'static Topic> {
        let needle = query.trim().to_lowercase();
        self.topics
            .iter()
            .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Previous and next topics around `slug`, for the footer buttons.
    pub fn neighbors(&self, slug: &str) -> (Option<&'static Topic>, Option<&'static Topic>) {
        let Some(index) = self.topics.iter().position(|t| t.slug == slug) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).map(|i| &self.topics[i]);
        (prev, self.topics.get(index + 1))
    }
}
