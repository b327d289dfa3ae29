use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct InvoiceListState {
    pub filter: String,
}

pub fn create_state() -> RwSignal<InvoiceListState> {
    RwSignal::new(InvoiceListState::default())
}
