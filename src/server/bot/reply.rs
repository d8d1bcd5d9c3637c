use crate::server::translation::{TranslationCache, Translator};

/// Piece of a reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Catalog phrase, translated when rendered.
    Phrase(&'static str),
    /// Literal text such as names, mentions or URLs, never translated.
    Text(String),
}

/// Bot reply built from catalog phrases and literal details.
///
/// Segments of a line are joined with a space, lines with a newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    lines: Vec<Vec<Segment>>,
}

impl Reply {
    /// Single-line reply consisting of one phrase.
    pub fn phrase(phrase: &'static str) -> Self {
        Self {
            lines: vec![vec![Segment::Phrase(phrase)]],
        }
    }

    /// Appends literal text to the last line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let segment = Segment::Text(detail.into());
        match self.lines.last_mut() {
            Some(line) => line.push(segment),
            None => self.lines.push(vec![segment]),
        }
        self
    }

    /// Appends a new line.
    pub fn line(mut self, segments: Vec<Segment>) -> Self {
        self.lines.push(segments);
        self
    }

    /// Renders the reply in `language`, translating each phrase through the cache.
    pub async fn render<T: Translator>(
        &self,
        cache: &TranslationCache<T>,
        language: &str,
    ) -> String {
        let mut rendered = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            let mut parts = Vec::with_capacity(line.len());
            for segment in line {
                match segment {
                    Segment::Phrase(phrase) => {
                        parts.push(cache.translate(phrase, language).await)
                    }
                    Segment::Text(text) => parts.push(text.clone()),
                }
            }
            rendered.push(parts.join(" "));
        }

        rendered.join("\n")
    }

    /// Renders the reply without translation.
    pub fn english(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|segment| match segment {
                        Segment::Phrase(phrase) => *phrase,
                        Segment::Text(text) => text.as_str(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
