use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SupplierListState {
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for SupplierListState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<SupplierListState> {
    RwSignal::new(SupplierListState::default())
}
