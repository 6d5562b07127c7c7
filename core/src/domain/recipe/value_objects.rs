use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 1500,
            temperature: 0.7,
        }
    }
}

/// What a photo is being searched for. Each kind gets its own query
/// qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSubject {
    Main,
    Pairing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DishCategory {
    Dessert,
    Soup,
    Drink,
    Pasta,
    Side,
    #[default]
    MainCourse,
}

/// Progress of a single enrichment call, reported through tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStage {
    Requesting,
    Parsing,
    ResolvingImages,
    Ready,
    Failed,
}

impl fmt::Display for EnrichmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            EnrichmentStage::Requesting => "requesting",
            EnrichmentStage::Parsing => "parsing",
            EnrichmentStage::ResolvingImages => "resolving_images",
            EnrichmentStage::Ready => "ready",
            EnrichmentStage::Failed => "failed",
        };
        f.write_str(stage)
    }
}
