//! Overview dashboard: summary cards, monthly sales bars, recent orders
//! and the low-stock list.

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::data::mock;
use crate::system::auth::context::use_auth;
use contracts::domain::a004_order::OrderStatus;
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
pub fn OverviewDashboard() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || {
        let name = auth
            .status
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Usuário".to_string());
        format!("Bem-vindo de volta, {}!", name)
    };

    let low_stock = mock::stock_items()
        .iter()
        .filter(|i| i.is_low())
        .collect::<Vec<_>>();
    let low_stock_count = low_stock.len();

    // Scale for the CSS bar chart: tallest month = 100%
    let max_sales = mock::MONTHLY_SALES
        .iter()
        .map(|(_, total)| *total)
        .max()
        .unwrap_or(1);

    view! {
        <div class="content">
            <PageHeader title="Dashboard" subtitle=Signal::derive(greeting)>
                <></>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Vendas Hoje".to_string()
                    icon_name="dollar-sign".to_string()
                    value="R$ 1.523,90".to_string()
                    change="+25%".to_string()
                    subtitle="desde ontem".to_string()
                />
                <StatCard
                    label="Pedidos".to_string()
                    icon_name="shopping-cart".to_string()
                    value="23".to_string()
                    change="+12%".to_string()
                    subtitle="desde ontem".to_string()
                />
                <StatCard
                    label="Produtos".to_string()
                    icon_name="package".to_string()
                    value="435".to_string()
                    subtitle=format!("{} com estoque baixo", low_stock_count)
                />
                <StatCard
                    label="Clientes".to_string()
                    icon_name="users".to_string()
                    value="256".to_string()
                    change="+8%".to_string()
                    subtitle="este mês".to_string()
                />
            </div>

            <div class="dashboard-grid">
                <div class="panel">
                    <h2 class="panel__title">"Vendas por mês"</h2>
                    <div class="bar-chart">
                        {mock::MONTHLY_SALES.iter().map(|(month, total)| {
                            let height = (total * 100) / max_sales;
                            view! {
                                <div class="bar-chart__column">
                                    <div
                                        class="bar-chart__bar"
                                        style=format!("height: {}%", height)
                                        title=format!("R$ {},00", total)
                                    ></div>
                                    <span class="bar-chart__label">{*month}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="panel">
                    <h2 class="panel__title">"Estoque baixo"</h2>
                    <div class="low-stock-list">
                        {low_stock.into_iter().map(|item| view! {
                            <div class="low-stock-list__row">
                                <span>{item.product_name.clone()}</span>
                                <span class="low-stock-list__counts">
                                    {item.current_stock}
                                    " / mín. "
                                    {item.min_stock}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="panel">
                <h2 class="panel__title">"Pedidos recentes"</h2>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Pedido"</th>
                                <th class="table__header-cell">"Cliente"</th>
                                <th class="table__header-cell">"Total"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Data"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {mock::RECENT_ORDERS.iter().map(|order| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{order.id}</td>
                                    <td class="table__cell">{order.customer}</td>
                                    <td class="table__cell">{order.total}</td>
                                    <td class="table__cell">{status_badge(order.status)}</td>
                                    <td class="table__cell">{order.date}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
