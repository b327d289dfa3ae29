pub mod state;

use self::state::create_state;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::number_format::format_brl;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::mock;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_toasts;
use contracts::domain::a005_invoice::{Invoice, InvoiceStatus};
use leptos::prelude::*;

fn status_badge(status: InvoiceStatus) -> impl IntoView {
    let (variant, icon_name) = match status {
        InvoiceStatus::Issued => ("success", "check"),
        InvoiceStatus::Pending => ("warning", "clock"),
        InvoiceStatus::Cancelled => ("error", "alert-triangle"),
    };
    view! {
        <Badge variant=variant.to_string()>
            {icon(icon_name)}
            {status.label()}
        </Badge>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let state = create_state();
    let toasts = use_toasts();

    let filtered = move || {
        let s = state.get();
        mock::invoices()
            .iter()
            .filter(|invoice| s.filter.trim().is_empty() || invoice.matches_search(&s.filter))
            .cloned()
            .collect::<Vec<Invoice>>()
    };

    let issued_count = mock::invoices()
        .iter()
        .filter(|i| i.status == InvoiceStatus::Issued)
        .count();

    let handle_new = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "A emissão de notas fiscais será implementada em breve.",
        );
    };

    let handle_download = move |id: String| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            &format!("O download da nota {} será implementado em breve.", id),
        );
    };

    view! {
        <div class="content">
            <PageHeader title="Notas Fiscais" subtitle="Emita e acompanhe suas notas fiscais".to_string()>
                <Button on_click=Callback::new(handle_new)>
                    {icon("plus")}
                    "Emitir Nota"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.get().filter)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter = value);
                    })
                    placeholder="Buscar por nota ou cliente..."
                />
                <span class="list-toolbar__summary">
                    {issued_count}
                    " notas emitidas com sucesso"
                </span>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nota"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = filtered();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            "Nenhuma nota fiscal encontrada."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|invoice| {
                                    let id_for_download = invoice.id.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{invoice.id.clone()}</td>
                                            <td class="table__cell">{invoice.customer.clone()}</td>
                                            <td class="table__cell">{invoice.date.clone()}</td>
                                            <td class="table__cell">{format_brl(invoice.total)}</td>
                                            <td class="table__cell">{status_badge(invoice.status)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| handle_download(id_for_download.clone()))>
                                                    {icon("receipt")}
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
