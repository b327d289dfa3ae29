//! Sidebar with the main navigation menu and the business badge.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::policy::{plan_allows, Feature};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Entry is hidden unless the current plan allows the feature
    gated: Option<Feature>,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            key: "d400_overview",
            label: tab_label_for_key("d400_overview"),
            icon: "layout-dashboard",
            gated: None,
        },
        MenuItem {
            key: "u501_pos_sale",
            label: tab_label_for_key("u501_pos_sale"),
            icon: "store",
            gated: None,
        },
        MenuItem {
            key: "a001_product",
            label: tab_label_for_key("a001_product"),
            icon: "package",
            gated: None,
        },
        MenuItem {
            key: "a006_stock_item",
            label: tab_label_for_key("a006_stock_item"),
            icon: "clipboard-list",
            gated: None,
        },
        MenuItem {
            key: "a004_order",
            label: tab_label_for_key("a004_order"),
            icon: "shopping-cart",
            gated: None,
        },
        MenuItem {
            key: "a005_invoice",
            label: tab_label_for_key("a005_invoice"),
            icon: "file-text",
            gated: Some(Feature::Invoices),
        },
        MenuItem {
            key: "a002_customer",
            label: tab_label_for_key("a002_customer"),
            icon: "users",
            gated: None,
        },
        MenuItem {
            key: "a003_supplier",
            label: tab_label_for_key("a003_supplier"),
            icon: "truck",
            gated: None,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let business_name = move || {
        auth.status
            .get()
            .user()
            .map(|u| u.business_name.clone())
            .unwrap_or_else(|| "Meu Negócio".to_string())
    };

    let plan_label = move || {
        auth.status
            .get()
            .user()
            .map(|u| u.plan.label())
            .unwrap_or("Trial Gratuito")
    };

    // Plan snapshot for filtering gated entries; the sidebar is rebuilt
    // on auth changes by the reactive closure below.
    let items = move || {
        let plan = auth
            .status
            .get()
            .user()
            .map(|u| u.plan)
            .unwrap_or_default();
        get_menu_items()
            .into_iter()
            .filter(|item| item.gated.map(|f| plan_allows(plan, f)).unwrap_or(true))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__business">
                <p class="app-sidebar__business-name">{business_name}</p>
                <span class="app-sidebar__plan-badge">{plan_label}</span>
            </div>

            <nav class="app-sidebar__nav">
                {move || items().into_iter().map(|item| {
                    let item_key = StoredValue::new(item.key.to_string());
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                let key = item_key.get_value();
                                ctx.active.get().as_ref().map(|a| a == &key).unwrap_or(false)
                            }
                            on:click=move |_| {
                                ctx.open_tab(item.key, item.label);
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
