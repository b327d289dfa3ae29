pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_toasts;
use contracts::domain::a003_supplier::Supplier;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct SupplierRow {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub category: String,
    pub last_order: String,
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id.value(),
            name: s.name.clone(),
            contact: s.contact.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            city: s.city.clone(),
            category: s.category.clone(),
            last_order: s.last_order.clone(),
        }
    }
}

impl Searchable for SupplierRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.contact.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

impl Sortable for SupplierRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "last_order" => self.last_order.cmp(&other.last_order),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let rows = move || {
        let s = state.get();
        let mut items: Vec<SupplierRow> = mock::suppliers().iter().map(Into::into).collect();
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
            "O cadastro de fornecedores será implementado em breve.",
        );
    };

    let handle_view = move |id: i64| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!("Detalhes do fornecedor {} serão implementados em breve.", id),
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Fornecedores" subtitle="Gerencie seus fornecedores e parceiros".to_string()>
                <Button on_click=Callback::new(handle_add)>
                    {icon("plus")}
                    "Novo Fornecedor"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar fornecedores..."
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Fornecedor"
                                {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell">"Contato"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Telefone"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "Cidade"
                                {move || get_sort_indicator(&state.get().sort_field, "city", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Categoria"
                                {move || get_sort_indicator(&state.get().sort_field, "category", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("last_order")>
                                "Último pedido"
                                {move || get_sort_indicator(&state.get().sort_field, "last_order", state.get().sort_ascending)}
                            </th>
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
                                            "Nenhum fornecedor encontrado."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.contact.clone()}</td>
                                            <td class="table__cell">{row.email.clone()}</td>
                                            <td class="table__cell">{row.phone.clone()}</td>
                                            <td class="table__cell">{row.city.clone()}</td>
                                            <td class="table__cell">{row.category.clone()}</td>
                                            <td class="table__cell">{row.last_order.clone()}</td>
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
