//! Heuristic tag suggestion for the capture path.
//!
//! Kept deliberately apart from the filter/stats/pagination contracts: the
//! engine never depends on how tags were produced. Capture-side front ends
//! plug a [`Tagger`] in when they want pre-filled tag fields.

/// Pluggable tagging collaborator.
pub trait Tagger {
    fn suggest(&self, title: &str, content: &str, url: &str) -> Vec<String>;
}

/// Case-insensitive keyword matcher over title, content, and url.
pub struct KeywordTagger {
    rules: Vec<(String, String)>,
}

impl KeywordTagger {
    /// Built-in rule table covering the common capture categories.
    pub fn new() -> Self {
        Self::with_rules(
            [
                ("recipe", "cooking"),
                ("ingredient", "cooking"),
                ("rust", "programming"),
                ("javascript", "programming"),
                ("python", "programming"),
                ("github.com", "code"),
                ("stackoverflow.com", "code"),
                ("tutorial", "learning"),
                ("course", "learning"),
                ("research", "research"),
                ("paper", "research"),
                ("news", "news"),
            ]
            .into_iter()
            .map(|(k, t)| (k.to_string(), t.to_string()))
            .collect(),
        )
    }

    pub fn with_rules(rules: Vec<(String, String)>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(k, t)| (k.to_lowercase(), t))
                .collect(),
        }
    }

    pub fn add_rule(&mut self, keyword: impl Into<String>, tag: impl Into<String>) {
        self.rules.push((keyword.into().to_lowercase(), tag.into()));
    }
}

impl Default for KeywordTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for KeywordTagger {
    fn suggest(&self, title: &str, content: &str, url: &str) -> Vec<String> {
        let haystack = format!("{title} {content} {url}").to_lowercase();
        let mut out: Vec<String> = Vec::new();
        for (keyword, tag) in &self.rules {
            if haystack.contains(keyword.as_str()) && !out.iter().any(|t| t == tag) {
                out.push(tag.clone());
            }
        }
        out
    }
}
