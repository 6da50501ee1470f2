#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCategory {
    Symptoms,
    Precautions,
}

impl SectionCategory {
    pub const ALL: [SectionCategory; 2] = [SectionCategory::Symptoms, SectionCategory::Precautions];

    pub fn label(self, lang: super::Lang) -> &'static str {
        let labels = lang.labels();
        match self {
            SectionCategory::Symptoms => labels.symptoms,
            SectionCategory::Precautions => labels.precautions,
        }
    }
}

/// Decides which categories a section heading covers. Each category is
/// judged on its own, so one heading may cover several.
pub trait SectionClassifier {
    fn matches(&self, title: &str, category: SectionCategory) -> bool;

    /// Every category `title` covers, in `SectionCategory::ALL` order.
    fn categories(&self, title: &str) -> Vec<SectionCategory> {
        SectionCategory::ALL
            .into_iter()
            .filter(|c| self.matches(title, *c))
            .collect()
    }
}

/// Case-insensitive substring match against per-category keyword lists.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<(SectionCategory, Vec<String>)>,
}

impl KeywordClassifier {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_keywords(mut self, category: SectionCategory, keywords: &[&str]) -> Self {
        let keywords = keywords.iter().map(|k| k.to_lowercase());
        match self.rules.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(keywords),
            None => self.rules.push((category, keywords.collect())),
        }
        self
    }
}

impl Default for KeywordClassifier {
    /// English and Telugu keywords.
    fn default() -> Self {
        Self::empty()
            .with_keywords(SectionCategory::Symptoms, &["symptom", "లక్షణాలు"])
            .with_keywords(
                SectionCategory::Precautions,
                &["prevent", "treatment", "precaution", "నివారణ", "చికిత్స"],
            )
    }
}

impl SectionClassifier for KeywordClassifier {
    fn matches(&self, title: &str, category: SectionCategory) -> bool {
        let title = title.to_lowercase();
        self.rules
            .iter()
            .filter(|(c, _)| *c == category)
            .flat_map(|(_, keywords)| keywords)
            .any(|k| title.contains(k.as_str()))
    }
}
