pub mod image_search;
pub mod llm;
pub mod random;
