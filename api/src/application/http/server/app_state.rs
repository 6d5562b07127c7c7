use std::sync::Arc;

use recipe_master_core::application::RecipeMasterService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeMasterService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeMasterService) -> Self {
        Self { args, service }
    }
}
