pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::number_format::format_brl;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_toasts;
use contracts::domain::a004_order::{Order, OrderStatus};
use leptos::prelude::*;

fn status_badge(status: OrderStatus) -> impl IntoView {
    let variant = match status {
        OrderStatus::Completed => "success",
        OrderStatus::Processing => "warning",
        OrderStatus::Cancelled => "error",
    };
    view! { <Badge variant=variant.to_string()>{status.label()}</Badge> }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let filtered = move || {
        let s = state.get();
        mock::orders()
            .iter()
            .filter(|order| s.filter.trim().is_empty() || order.matches_search(&s.filter))
            .cloned()
            .collect::<Vec<Order>>()
    };

    let count_with = |status: OrderStatus| {
        mock::orders()
            .iter()
            .filter(|o| o.status == status)
            .count()
    };
    let total_count = mock::orders().len();
    let completed_count = count_with(OrderStatus::Completed);
    let processing_count = count_with(OrderStatus::Processing);
    let cancelled_count = count_with(OrderStatus::Cancelled);

    let toggle_expanded = move |order_id: String| {
        state.update(|s| {
            s.expanded = if s.expanded.as_deref() == Some(&order_id) {
                None
            } else {
                Some(order_id)
            };
        });
    };

    let handle_new = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "A criação de novos pedidos será implementada em breve.",
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Pedidos" subtitle="Acompanhe e gerencie os pedidos da loja".to_string()>
                <Button on_click=Callback::new(handle_new)>
                    {icon("plus")}
                    "Novo Pedido"
                </Button>
            </PageHeader>

            <div class="count-cards">
                <div class="count-card">
                    <span class="count-card__value">{total_count}</span>
                    <span class="count-card__label">"Total"</span>
                </div>
                <div class="count-card count-card--success">
                    <span class="count-card__value">{completed_count}</span>
                    <span class="count-card__label">"Concluídos"</span>
                </div>
                <div class="count-card count-card--warning">
                    <span class="count-card__value">{processing_count}</span>
                    <span class="count-card__label">"Processando"</span>
                </div>
                <div class="count-card count-card--error">
                    <span class="count-card__value">{cancelled_count}</span>
                    <span class="count-card__label">"Cancelados"</span>
                </div>
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar por pedido ou cliente..."
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Pedido"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Pagamento"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = filtered();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "Nenhum pedido encontrado."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|order| {
                                    let order_id = order.id.clone();
                                    let order_id_for_expand = order_id.clone();
                                    let is_expanded = move || {
                                        state.get().expanded.as_deref() == Some(order_id_for_expand.as_str())
                                    };
                                    let items_view = order.items.clone();
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            on:click=move |_| toggle_expanded(order_id.clone())
                                        >
                                            <td class="table__cell">{order.id.clone()}</td>
                                            <td class="table__cell">{order.customer.clone()}</td>
                                            <td class="table__cell">{order.date.clone()}</td>
                                            <td class="table__cell">{order.payment_method.clone()}</td>
                                            <td class="table__cell">{format_brl(order.total)}</td>
                                            <td class="table__cell">{status_badge(order.status)}</td>
                                        </tr>
                                        <Show when=is_expanded>
                                            <tr class="table__row table__row--detail">
                                                <td class="table__cell" colspan="6">
                                                    <table class="table__nested">
                                                        <thead>
                                                            <tr>
                                                                <th>"Produto"</th>
                                                                <th>"Qtd"</th>
                                                                <th>"Valor"</th>
                                                            </tr>
                                                        </thead>
                                                        <tbody>
                                                            {items_view.clone().into_iter().map(|item| view! {
                                                                <tr>
                                                                    <td>{item.product.clone()}</td>
                                                                    <td>{item.quantity}</td>
                                                                    <td>{format_brl(item.price)}</td>
                                                                </tr>
                                                            }).collect_view()}
                                                        </tbody>
                                                    </table>
                                                </td>
                                            </tr>
                                        </Show>
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
