use std::sync::Arc;

use crate::presenter::MapComposition;

// Application state: the composed map, immutable after startup
#[derive(Clone)]
pub struct AppState {
    pub map: Arc<MapComposition>,
}

impl AppState {
    pub fn new(map: MapComposition) -> Self {
        Self { map: Arc::new(map) }
    }
}
