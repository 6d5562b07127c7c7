use crate::domain::{
    common::ports::RandomSource,
    recipe::{
        entities::ImageCandidate,
        value_objects::{DishCategory, ImageSubject},
    },
};

pub const MAIN_QUALIFIER: &str = "food dish professional food photography gourmet plating";
pub const PAIRING_QUALIFIER: &str = "food plating gourmet presentation culinary";

const MAX_QUERY_TERMS: usize = 3;
const MIN_ASPECT_RATIO: f64 = 1.3;
const MAX_ASPECT_RATIO: f64 = 2.0;
const MIN_WIDTH: u32 = 1920;
/// Slugs that usually mean raw produce or a room shot instead of a plate.
const REJECTED_URL_TERMS: [&str; 3] = ["table", "ingredient", "kitchen"];

pub const MAIN_COURSE_IMAGES: [&str; 4] = [
    "https://images.pexels.com/photos/675951/pexels-photo-675951.jpeg",
    "https://images.pexels.com/photos/2338407/pexels-photo-2338407.jpeg",
    "https://images.pexels.com/photos/262959/pexels-photo-262959.jpeg",
    "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
];

pub const DESSERT_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/291528/pexels-photo-291528.jpeg",
    "https://images.pexels.com/photos/1126359/pexels-photo-1126359.jpeg",
    "https://images.pexels.com/photos/2144112/pexels-photo-2144112.jpeg",
];

pub const DRINK_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/602750/pexels-photo-602750.jpeg",
    "https://images.pexels.com/photos/1194030/pexels-photo-1194030.jpeg",
    "https://images.pexels.com/photos/1437267/pexels-photo-1437267.jpeg",
];

pub const SIDE_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/1095550/pexels-photo-1095550.jpeg",
    "https://images.pexels.com/photos/1640774/pexels-photo-1640774.jpeg",
    "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
];

pub const SOUP_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/539451/pexels-photo-539451.jpeg",
    "https://images.pexels.com/photos/1731535/pexels-photo-1731535.jpeg",
    "https://images.pexels.com/photos/699953/pexels-photo-699953.jpeg",
];

pub const PASTA_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/1527603/pexels-photo-1527603.jpeg",
    "https://images.pexels.com/photos/1438672/pexels-photo-1438672.jpeg",
    "https://images.pexels.com/photos/1487511/pexels-photo-1487511.jpeg",
];

/// Keyword table checked top to bottom; the first category with a matching
/// keyword wins.
const CATEGORY_KEYWORDS: [(DishCategory, &[&str]); 5] = [
    (
        DishCategory::Dessert,
        &["cake", "cookie", "pie", "dessert", "sweet"],
    ),
    (DishCategory::Soup, &["soup", "stew"]),
    (
        DishCategory::Drink,
        &["smoothie", "juice", "drink", "beverage"],
    ),
    (DishCategory::Pasta, &["pasta", "noodle", "spaghetti"]),
    (DishCategory::Side, &["salad", "side", "vegetable"]),
];

impl ImageSubject {
    pub fn qualifier(&self) -> &'static str {
        match self {
            ImageSubject::Main => MAIN_QUALIFIER,
            ImageSubject::Pairing => PAIRING_QUALIFIER,
        }
    }
}

impl DishCategory {
    pub fn fallback_pool(&self) -> &'static [&'static str] {
        match self {
            DishCategory::Dessert => &DESSERT_IMAGES,
            DishCategory::Soup => &SOUP_IMAGES,
            DishCategory::Drink => &DRINK_IMAGES,
            DishCategory::Pasta => &PASTA_IMAGES,
            DishCategory::Side => &SIDE_IMAGES,
            DishCategory::MainCourse => &MAIN_COURSE_IMAGES,
        }
    }
}

/// Builds the photo search query: punctuation stripped, first three words,
/// then a qualifier that steers results toward plated food photography.
pub fn build_search_query(subject: &str, kind: ImageSubject) -> String {
    let cleaned: String = subject
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    let terms = cleaned
        .split_whitespace()
        .take(MAX_QUERY_TERMS)
        .collect::<Vec<_>>()
        .join(" ");

    if terms.is_empty() {
        kind.qualifier().to_string()
    } else {
        format!("{} {}", terms, kind.qualifier())
    }
}

pub fn is_acceptable(candidate: &ImageCandidate) -> bool {
    if candidate.height == 0 || candidate.width < MIN_WIDTH {
        return false;
    }

    let aspect_ratio = f64::from(candidate.width) / f64::from(candidate.height);
    if !(MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&aspect_ratio) {
        return false;
    }

    let url = candidate.url.to_lowercase();
    !REJECTED_URL_TERMS.iter().any(|term| url.contains(term))
}

/// Keeps wide, high resolution shots that look like a plated dish.
pub fn filter_candidates(candidates: Vec<ImageCandidate>) -> Vec<ImageCandidate> {
    candidates.into_iter().filter(is_acceptable).collect()
}

pub fn classify_dish(name: &str) -> DishCategory {
    let name = name.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

pub fn pick<'a, T, RS>(items: &'a [T], random: &RS) -> Option<&'a T>
where
    RS: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(random.pick_index(items.len()))
}

/// A stock photo from the pool of the dish's category. Never touches the
/// search service.
pub fn fallback_image<RS>(subject: &str, random: &RS) -> String
where
    RS: RandomSource + ?Sized,
{
    let pool = classify_dish(subject).fallback_pool();
    pick(pool, random)
        .or_else(|| pool.first())
        .map(|url| url.to_string())
        .unwrap_or_default()
}
