//! Point-of-sale screen: cart building, payment selection and the
//! completion receipt. Each phase renders its own block; the session
//! lives in the view-model.

use super::view_model::PosViewModel;
use crate::shared::components::table::number_format::format_brl;
use crate::shared::components::ui::Button;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::notify::use_toasts;
use contracts::checkout::{CheckoutPhase, PaymentMethod};
use leptos::prelude::*;
use rust_decimal::Decimal;

fn method_icon(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::CreditCard | PaymentMethod::DebitCard => "credit-card",
        PaymentMethod::Cash => "banknote",
        PaymentMethod::Pix => "smartphone",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PosSaleView() -> impl IntoView {
    let toasts = use_toasts();
    let vm = PosViewModel::new(toasts);

    // Memoized so cart mutations do not remount the active step (which
    // would reset its local inputs); only a real phase change does.
    let phase = Memo::new(move |_| vm.session.with(|s| s.phase));

    let title = move || match phase.get() {
        CheckoutPhase::Cart => "Atendimento",
        CheckoutPhase::Payment => "Finalizar Venda",
        CheckoutPhase::Complete => "Venda Concluída",
    };

    let subtitle = move || match phase.get() {
        CheckoutPhase::Cart => "Registre uma nova venda",
        CheckoutPhase::Payment => "Selecione o método de pagamento",
        CheckoutPhase::Complete => "A venda foi processada com sucesso",
    };

    view! {
        <div class="content pos">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    <div class="page-header__subtitle">{subtitle}</div>
                </div>
            </div>

            {move || match phase.get() {
                CheckoutPhase::Cart => view! { <CartStep vm=vm /> }.into_any(),
                CheckoutPhase::Payment => view! { <PaymentStep vm=vm /> }.into_any(),
                CheckoutPhase::Complete => view! { <CompleteStep vm=vm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn CartStep(vm: PosViewModel) -> impl IntoView {
    let toasts = use_toasts();
    let (product_code, set_product_code) = signal(String::new());
    let (product_search, set_product_search) = signal(String::new());
    let (customer_search, set_customer_search) = signal(String::new());

    let handle_code_search = move || {
        let code = product_code.get();
        if vm.add_product_by_code(&code) {
            set_product_code.set(String::new());
        }
    };

    let filtered_products = move || {
        let term = product_search.get();
        vm.catalog()
            .iter()
            .filter(|p| term.trim().is_empty() || p.matches_search(&term))
            .collect::<Vec<_>>()
    };

    let filtered_customers = move || {
        let term = customer_search.get();
        vm.directory()
            .iter()
            .filter(|c| c.matches_search(&term))
            .collect::<Vec<_>>()
    };

    let item_count_label = move || {
        let count = vm.session.with(|s| s.item_count());
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} itens", count)
        }
    };

    let cart_is_empty = move || vm.session.with(|s| s.lines.is_empty());

    let handle_new_customer = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "O cadastro de clientes será implementado em breve.",
        );
    };

    view! {
        <div class="pos__grid">
            // Left column - product code entry and catalog
            <div class="pos__products">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Produtos"</h3>
                    </div>
                    <div class="card__body">
                        <div class="pos__code-entry">
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Código do produto..."
                                prop:value=move || product_code.get()
                                on:input=move |ev| set_product_code.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        handle_code_search();
                                    }
                                }
                            />
                            <Button on_click=Callback::new(move |_| handle_code_search())>
                                {icon("plus")}
                                "Adicionar"
                            </Button>
                        </div>

                        <div class="pos__search">
                            <input
                                type="search"
                                class="form__input"
                                placeholder="Buscar produtos..."
                                prop:value=move || product_search.get()
                                on:input=move |ev| set_product_search.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="table-container">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Código"</th>
                                        <th class="table__header-cell">"Produto"</th>
                                        <th class="table__header-cell">"Preço"</th>
                                        <th class="table__header-cell">"Estoque"</th>
                                        <th class="table__header-cell"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let products = filtered_products();
                                        if products.is_empty() {
                                            view! {
                                                <tr>
                                                    <td class="table__cell table__cell--empty" colspan="5">
                                                        "Nenhum produto encontrado."
                                                    </td>
                                                </tr>
                                            }.into_any()
                                        } else {
                                            products.into_iter().map(|product| {
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">{product.code.clone()}</td>
                                                        <td class="table__cell">{product.name.clone()}</td>
                                                        <td class="table__cell">{format_brl(product.price)}</td>
                                                        <td class="table__cell">{product.stock}</td>
                                                        <td class="table__cell table__cell--actions">
                                                            <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| vm.add_product(product))>
                                                                {icon("plus")}
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
                </div>
            </div>

            // Right column - customer and cart
            <div class="pos__sidebar">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Cliente"</h3>
                    </div>
                    <div class="card__body">
                        {move || {
                            let customer = vm.session.with(|s| s.customer.clone());
                            match customer {
                                Some(customer) => view! {
                                    <div class="pos__customer-card">
                                        <div>
                                            <p class="pos__customer-name">{customer.name.clone()}</p>
                                            <p class="pos__customer-detail">{customer.email.clone()}</p>
                                            <p class="pos__customer-detail">{customer.phone.clone()}</p>
                                        </div>
                                        <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| vm.detach_customer())>
                                            {icon("x")}
                                        </Button>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div>
                                        <input
                                            type="search"
                                            class="form__input"
                                            placeholder="Buscar cliente..."
                                            prop:value=move || customer_search.get()
                                            on:input=move |ev| set_customer_search.set(event_target_value(&ev))
                                        />

                                        {move || (!customer_search.get().trim().is_empty()).then(|| {
                                            let customers = filtered_customers();
                                            view! {
                                                <div class="pos__customer-results">
                                                    {if customers.is_empty() {
                                                        view! {
                                                            <div class="pos__customer-empty">"Nenhum cliente encontrado."</div>
                                                        }.into_any()
                                                    } else {
                                                        customers.into_iter().map(|customer| view! {
                                                            <div
                                                                class="pos__customer-result"
                                                                on:click=move |_| {
                                                                    vm.attach_customer(customer);
                                                                    set_customer_search.set(String::new());
                                                                }
                                                            >
                                                                <div>
                                                                    <p class="pos__customer-name">{customer.name.clone()}</p>
                                                                    <p class="pos__customer-detail">{customer.email.clone()}</p>
                                                                </div>
                                                                {icon("plus")}
                                                            </div>
                                                        }).collect_view().into_any()
                                                    }}
                                                </div>
                                            }
                                        })}

                                        <div class="pos__customer-footer">
                                            <span>"ou"</span>
                                            <Button variant="secondary".to_string() size="sm".to_string() on_click=Callback::new(handle_new_customer)>
                                                {icon("plus")}
                                                "Novo Cliente"
                                            </Button>
                                        </div>
                                    </div>
                                }.into_any(),
                            }
                        }}
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Carrinho"</h3>
                        <span class="card__meta">{item_count_label}</span>
                    </div>
                    <div class="card__body">
                        {move || {
                            let lines = vm.session.with(|s| s.lines.clone());
                            if lines.is_empty() {
                                view! {
                                    <div class="pos__cart-empty">
                                        {icon("shopping-cart")}
                                        <h4>"Carrinho vazio"</h4>
                                        <p>"Adicione produtos ao carrinho para iniciar uma venda."</p>
                                    </div>
                                }.into_any()
                            } else {
                                lines.into_iter().map(|line| {
                                    let product_id = line.product_id;
                                    let quantity = line.quantity;
                                    let line_total = line.total();
                                    view! {
                                        <div class="pos__cart-line">
                                            <div class="pos__cart-line-info">
                                                <p class="pos__cart-line-name">{line.name.clone()}</p>
                                                <p class="pos__cart-line-price">
                                                    {format_brl(line.price)}
                                                    " un. | Total: "
                                                    {format_brl(line_total)}
                                                </p>
                                            </div>
                                            <div class="pos__cart-line-controls">
                                                <Button variant="secondary".to_string() size="sm".to_string() on_click=Callback::new(move |_| vm.update_quantity(product_id, quantity.saturating_sub(1)))>
                                                    {icon("minus")}
                                                </Button>
                                                <span class="pos__cart-line-qty">{quantity}</span>
                                                <Button variant="secondary".to_string() size="sm".to_string() on_click=Callback::new(move |_| vm.update_quantity(product_id, quantity + 1))>
                                                    {icon("plus")}
                                                </Button>
                                                <Button variant="ghost".to_string() size="sm".to_string() on_click=Callback::new(move |_| vm.remove_line(product_id))>
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </div>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                    <div class="card__footer">
                        <div>
                            <p class="pos__total-label">"Total"</p>
                            <p class="pos__total-value">{move || format_brl(vm.subtotal())}</p>
                        </div>
                        <Button
                            disabled=Signal::derive(cart_is_empty)
                            on_click=Callback::new(move |_| vm.begin_checkout())
                        >
                            {icon("tag")}
                            "Finalizar Venda"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn PaymentStep(vm: PosViewModel) -> impl IntoView {
    let selected_method = move || vm.session.with(|s| s.payment_method);
    let is_processing = move || vm.session.with(|s| s.payment_in_flight);
    let submit_disabled =
        Signal::derive(move || selected_method().is_none() || is_processing());

    view! {
        <div class="pos__grid pos__grid--two">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Resumo da venda"</h3>
                </div>
                <div class="card__body">
                    {move || vm.session.with(|s| s.customer.clone()).map(|customer| view! {
                        <div class="pos__summary-customer">
                            <h4>"Cliente"</h4>
                            <div class="pos__customer-card">
                                <div>
                                    <p class="pos__customer-name">{customer.name.clone()}</p>
                                    <p class="pos__customer-detail">{customer.email.clone()}</p>
                                    <p class="pos__customer-detail">{customer.phone.clone()}</p>
                                </div>
                            </div>
                        </div>
                    })}

                    <h4>"Itens"</h4>
                    <div class="table-container">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Produto"</th>
                                    <th class="table__header-cell table__header-cell--right">"Qtd"</th>
                                    <th class="table__header-cell table__header-cell--right">"Valor"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || vm.session.with(|s| s.lines.clone()).into_iter().map(|line| {
                                    let line_total = line.total();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{line.name.clone()}</td>
                                            <td class="table__cell table__cell--right">{line.quantity}</td>
                                            <td class="table__cell table__cell--right">{format_brl(line_total)}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <div class="pos__summary-totals">
                        <div class="pos__summary-row">
                            <span>"Subtotal"</span>
                            <span>{move || format_brl(vm.subtotal())}</span>
                        </div>
                        <div class="pos__summary-row">
                            <span>"Desconto"</span>
                            <span>{format_brl(Decimal::ZERO)}</span>
                        </div>
                        <div class="pos__summary-row pos__summary-row--total">
                            <span>"Total"</span>
                            <span>{move || format_brl(vm.subtotal())}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Forma de Pagamento"</h3>
                </div>
                <div class="card__body">
                    <div class="pos__methods">
                        {PaymentMethod::ALL.into_iter().map(|method| {
                            view! {
                                <button
                                    type="button"
                                    class="pos__method"
                                    class:pos__method--selected=move || selected_method() == Some(method)
                                    on:click=move |_| vm.select_payment_method(method)
                                >
                                    {icon(method_icon(method))}
                                    <span>{method.label()}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <div class="card__footer">
                    <Button variant="secondary".to_string() on_click=Callback::new(move |_| vm.cancel_checkout())>
                        "Voltar"
                    </Button>
                    <Button
                        disabled=submit_disabled
                        on_click=Callback::new(move |_| vm.submit_payment())
                    >
                        {move || if is_processing() {
                            view! {
                                <span class="spinner spinner--small"></span>
                                "Processando..."
                            }.into_any()
                        } else {
                            view! {
                                {icon("credit-card")}
                                "Finalizar Pagamento"
                            }.into_any()
                        }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn CompleteStep(vm: PosViewModel) -> impl IntoView {
    let toasts = use_toasts();

    let method_label = move || {
        vm.session
            .with(|s| s.payment_method)
            .map(|m| m.label())
            .unwrap_or("-")
    };

    let handle_print = move |_| {
        toasts.info(
            "Funcionalidade em desenvolvimento",
            "A impressão de recibos será implementada em breve.",
        );
    };

    view! {
        <div class="pos__complete">
            <div class="card pos__complete-card">
                <div class="card__body">
                    <div class="pos__complete-icon">
                        {icon("check")}
                    </div>
                    <h2>"Venda Finalizada"</h2>
                    <p class="pos__complete-note">"O pagamento foi processado com sucesso."</p>

                    <div class="pos__receipt">
                        <div class="pos__receipt-row">
                            <span>"Número da venda"</span>
                            <span class="pos__receipt-value">
                                {move || format!("#{:05}", vm.sale_number.get())}
                            </span>
                        </div>
                        <div class="pos__receipt-row">
                            <span>"Data"</span>
                            <span class="pos__receipt-value">{date_utils::today()}</span>
                        </div>
                        <div class="pos__receipt-row">
                            <span>"Forma de pagamento"</span>
                            <span class="pos__receipt-value">{method_label}</span>
                        </div>
                        <div class="pos__receipt-row">
                            <span>"Itens"</span>
                            <span class="pos__receipt-value">
                                {move || vm.session.with(|s| s.item_count())}
                            </span>
                        </div>
                        <div class="pos__receipt-row pos__receipt-row--total">
                            <span>"Total"</span>
                            <span class="pos__receipt-value">
                                {move || format_brl(vm.subtotal())}
                            </span>
                        </div>
                    </div>

                    <div class="pos__complete-actions">
                        <Button variant="secondary".to_string() on_click=Callback::new(handle_print)>
                            {icon("receipt")}
                            "Imprimir Recibo"
                        </Button>
                        <Button on_click=Callback::new(move |_| vm.start_new_sale())>
                            {icon("shopping-cart")}
                            "Nova Venda"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
