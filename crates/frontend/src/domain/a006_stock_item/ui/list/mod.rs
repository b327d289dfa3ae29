pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_toasts;
use contracts::domain::a006_stock_item::{MovementKind, StockItem};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn StockItemList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let filtered = move || {
        let s = state.get();
        mock::stock_items()
            .iter()
            .filter(|item| s.filter.trim().is_empty() || item.matches_search(&s.filter))
            .cloned()
            .collect::<Vec<StockItem>>()
    };

    let low_stock_count = mock::stock_items().iter().filter(|i| i.is_low()).count();

    let handle_add_movement = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "O registro de movimentação será implementado em breve.",
        );
    };

    let handle_update_stock = move |id: i64| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!(
                "A atualização do estoque do produto {} será implementada em breve.",
                id
            ),
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Estoque" subtitle="Gerencie o estoque de produtos e acompanhe movimentações".to_string()>
                <Button on_click=Callback::new(handle_add_movement)>
                    {icon("plus")}
                    "Nova Movimentação"
                </Button>
            </PageHeader>

            {(low_stock_count > 0).then(|| view! {
                <div class="alert alert--warning">
                    {icon("alert-triangle")}
                    <span>
                        {low_stock_count}
                        " produtos abaixo do estoque mínimo"
                    </span>
                </div>
            })}

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar por produto, SKU ou localização..."
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Produto"</th>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Atual"</th>
                            <th class="table__header-cell">"Mínimo"</th>
                            <th class="table__header-cell">"Máximo"</th>
                            <th class="table__header-cell">"Localização"</th>
                            <th class="table__header-cell">"Situação"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = filtered();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">
                                            "Nenhum item encontrado."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|item| {
                                    let id = item.id.value();
                                    let low = item.is_low();
                                    view! {
                                        <tr class="table__row" class:table__row--alert=low>
                                            <td class="table__cell">{item.product_name.clone()}</td>
                                            <td class="table__cell">{item.sku.clone()}</td>
                                            <td class="table__cell">{item.current_stock}</td>
                                            <td class="table__cell">{item.min_stock}</td>
                                            <td class="table__cell">{item.max_stock}</td>
                                            <td class="table__cell">{item.location.clone()}</td>
                                            <td class="table__cell">
                                                {if low {
                                                    view! { <Badge variant="warning".to_string()>"Estoque baixo"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge variant="success".to_string()>"OK"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| handle_update_stock(id))>
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

            <h2 class="section-title">"Movimentações recentes"</h2>
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Produto"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Quantidade"</th>
                            <th class="table__header-cell">"Observações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {mock::stock_movements().iter().map(|movement| {
                            let inbound = movement.kind == MovementKind::Inbound;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{movement.date.clone()}</td>
                                    <td class="table__cell">{movement.product_name.clone()}</td>
                                    <td class="table__cell">
                                        <span class=if inbound { "movement movement--in" } else { "movement movement--out" }>
                                            {icon(if inbound { "arrow-down" } else { "arrow-up" })}
                                            {movement.kind.label()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{movement.quantity}</td>
                                    <td class="table__cell">{movement.notes.clone()}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
