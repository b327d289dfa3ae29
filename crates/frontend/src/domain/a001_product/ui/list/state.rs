use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
