use std::sync::Arc;

use nourish_core::application::NourishService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NourishService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NourishService) -> Self {
        Self { args, service }
    }
}
