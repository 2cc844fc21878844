use std::collections::HashMap;

/// Feature that opens its own full page instead of the detail pane.
pub const LISTENING_FEATURE: &str = "listening";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub id: String,
    pub title: String,
    /// Renderable content fragment (HTML).
    pub body: String,
}

impl FeatureDescriptor {
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Immutable lookup of feature content by identifier.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    features: HashMap<String, FeatureDescriptor>,
}

impl FeatureCatalog {
    pub fn new(descriptors: impl IntoIterator<Item = FeatureDescriptor>) -> Self {
        Self {
            features: descriptors
                .into_iter()
                .map(|d| (d.id.clone(), d))
                .collect(),
        }
    }

    /// The product's built-in catalog.
    pub fn standard() -> Self {
        Self::new([
            FeatureDescriptor::new(
                "vocabulary",
                "Learn Vocabulary",
                "<p>📘 Practice new words with smart repetition.</p>",
            ),
            FeatureDescriptor::new(
                "reading",
                "Reading Practice",
                "<p>📖 Read IELTS-style passages and answer questions.</p>",
            ),
            FeatureDescriptor::new(
                "writing",
                "Writing Practice",
                "<textarea placeholder=\"Write your essay here...\"></textarea>\n<button>Submit Essay</button>",
            ),
            FeatureDescriptor::new(
                "speaking",
                "Speaking Practice",
                "<p>🎤 Practice speaking topics with guidance.</p>",
            ),
            FeatureDescriptor::new(
                "band9",
                "Band 9.0 Samples",
                "<p>⭐ View high-scoring IELTS answers.</p>",
            ),
            FeatureDescriptor::new(
                "mock",
                "Full Mock Test",
                "<p>📝 Take a complete IELTS mock exam.</p>",
            ),
            FeatureDescriptor::new(
                "leaderboard",
                "Leaderboard",
                "<p>🏆 See top students and rankings.</p>",
            ),
            FeatureDescriptor::new(
                "translation",
                "Translation Practice",
                "<p>🌍 Translate texts and improve accuracy.</p>",
            ),
            FeatureDescriptor::new(
                "lessons",
                "Join My Lessons",
                "<p>📚 Join live lessons with teachers.</p>",
            ),
            FeatureDescriptor::new(
                "students",
                "Student Results",
                "<p>📊 View student performance statistics.</p>",
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.features.get(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
