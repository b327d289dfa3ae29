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
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Threshold under which a product is flagged as low stock on this screen
const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.value(),
            code: p.code.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price,
            stock: p.stock,
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let term = filter.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.code.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "price" => self.price.cmp(&other.price),
            "stock" => self.stock.cmp(&other.stock),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let rows = move || {
        let s = state.get();
        let mut items: Vec<ProductRow> = mock::products().iter().map(Into::into).collect();
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
            "A adição de produtos será implementada em breve.",
        );
    };

    let handle_edit = move |id: i64| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!("Edição do produto {} será implementada em breve.", id),
        );
    };

    let handle_delete = move |id: i64| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!("Exclusão do produto {} será implementada em breve.", id),
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Produtos" subtitle="Gerencie seu catálogo de produtos".to_string()>
                <Button on_click=Callback::new(handle_add)>
                    {icon("plus")}
                    "Adicionar Produto"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar produtos..."
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Código"
                                {move || get_sort_indicator(&state.get().sort_field, "code", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Produto"
                                {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Categoria"
                                {move || get_sort_indicator(&state.get().sort_field, "category", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("price")>
                                "Preço"
                                {move || get_sort_indicator(&state.get().sort_field, "price", state.get().sort_ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stock")>
                                "Estoque"
                                {move || get_sort_indicator(&state.get().sort_field, "stock", state.get().sort_ascending)}
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
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "Nenhum produto encontrado."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.code.clone()}</td>
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.category.clone()}</td>
                                            <td class="table__cell">{format_brl(row.price)}</td>
                                            <td class="table__cell">
                                                {row.stock}
                                                {(row.stock < LOW_STOCK_THRESHOLD).then(|| view! {
                                                    <Badge variant="warning".to_string()>"Baixo"</Badge>
                                                })}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| handle_edit(id))>
                                                    {icon("edit")}
                                                </Button>
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| handle_delete(id))>
                                                    {icon("trash")}
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
