use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct StockListState {
    pub filter: String,
}

pub fn create_state() -> RwSignal<StockListState> {
    RwSignal::new(StockListState::default())
}
