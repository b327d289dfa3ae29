use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrderListState {
    pub filter: String,
    /// Order id whose items are expanded inline, if any
    pub expanded: Option<String>,
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
