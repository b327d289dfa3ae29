pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::number_format::format_brl;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_toasts;
use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub registered: String,
    pub last_purchase: String,
    pub total_spent: Decimal,
    pub active: bool,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.value(),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            city: c.city.clone(),
            registered: c.registered.clone(),
            last_purchase: c.last_purchase.clone(),
            total_spent: c.total_spent,
            active: c.active,
        }
    }
}

impl Searchable for CustomerRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.city.to_lowercase().contains(&term)
    }
}

impl Sortable for CustomerRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "last_purchase" => self.last_purchase.cmp(&other.last_purchase),
            "total_spent" => self.total_spent.cmp(&other.total_spent),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let rows = move || {
        let s = state.get();
        let mut items: Vec<CustomerRow> = mock::customers().iter().map(Into::into).collect();
        items = filter_list(items, &s.filter);
        sort_list(&mut items, &s.sort_field, s.sort_ascending);
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let handle_add = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "O cadastro de clientes será implementado em breve.",
        );
    };

    let handle_view = move |id: i64| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!("Detalhes do cliente {} serão implementados em breve.", id),
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Clientes" subtitle="Gerencie sua base de clientes".to_string()>
                <Button on_click=Callback::new(handle_add)>
                    {icon("plus")}
                    "Novo Cliente"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar clientes..."
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Nome"
                                {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Telefone"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "Cidade"
                                {move || get_sort_indicator(&state.get().sort_field, "city", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("last_purchase")>
                                "Última compra"
                                {move || get_sort_indicator(&state.get().sort_field, "last_purchase", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("total_spent")>
                                "Total gasto"
                                {move || get_sort_indicator(&state.get().sort_field, "total_spent", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = rows();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">
                                            "Nenhum cliente encontrado."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.email.clone()}</td>
                                            <td class="table__cell">{row.phone.clone()}</td>
                                            <td class="table__cell">{row.city.clone()}</td>
                                            <td class="table__cell">{row.last_purchase.clone()}</td>
                                            <td class="table__cell">{format_brl(row.total_spent)}</td>
                                            <td class="table__cell">
                                                {if row.active {
                                                    view! { <Badge variant="success".to_string()>"Ativo"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge variant="neutral".to_string()>"Inativo"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| handle_view(id))>
                                                    {icon("edit")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
