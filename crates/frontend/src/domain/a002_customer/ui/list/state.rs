use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CustomerListState {
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}
