use std::sync::Arc;

use crate::domain::{
    common::ports::RandomSource,
    recipe::{
        ports::{ImageSearchClient, LLMClient},
        value_objects::GenerationOptions,
    },
};

pub struct Service<LLM, IS, RS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
    RS: RandomSource,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_search: Arc<IS>,
    pub(crate) random: Arc<RS>,
    pub(crate) generation: GenerationOptions,
}

impl<LLM, IS, RS> Service<LLM, IS, RS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
    RS: RandomSource,
{
    pub fn new(
        llm_client: LLM,
        image_search: IS,
        random: RS,
        generation: GenerationOptions,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_search: Arc::new(image_search),
            random: Arc::new(random),
            generation,
        }
    }
}

impl<LLM, IS, RS> Clone for Service<LLM, IS, RS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
    RS: RandomSource,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            image_search: Arc::clone(&self.image_search),
            random: Arc::clone(&self.random),
            generation: self.generation.clone(),
        }
    }
}
