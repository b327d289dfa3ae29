//! Tab content registry - single source of truth for the tab.key → View
//! mapping. All tab keys are gathered here in one place.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_invoice::ui::list::InvoiceList;
use crate::domain::a006_stock_item::ui::list::StockItemList;
use crate::system::auth::guard::RequirePlan;
use crate::usecases::u501_pos_sale::PosSaleView;
use contracts::system::policy::Feature;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content for a tab key.
///
/// Unknown keys get a placeholder instead of panicking so a stale
/// `?active=` URL cannot take the shell down.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "u501_pos_sale" => view! { <PosSaleView /> }.into_any(),

        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_customer" => view! { <CustomerList /> }.into_any(),
        "a003_supplier" => view! { <SupplierList /> }.into_any(),
        "a004_order" => view! { <OrderList /> }.into_any(),

        // Plan-gated: the free plan sees an upgrade notice instead.
        "a005_invoice" => view! {
            <RequirePlan feature=Feature::Invoices>
                <InvoiceList />
            </RequirePlan>
        }
        .into_any(),

        "a006_stock_item" => view! { <StockItemList /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Página não encontrada"</div> }.into_any()
        }
    }
}
