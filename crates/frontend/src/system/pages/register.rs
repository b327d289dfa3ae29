use contracts::system::auth::{Plan, RegisterForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::notify::use_toasts;
use crate::system::auth::context::use_auth;

#[component]
pub fn RegisterPage(
    /// Switch back to the login screen
    on_login: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (business_name, set_business_name) = signal(String::new());
    let (plan, set_plan) = signal(Plan::Free);
    let (is_submitting, set_is_submitting) = signal(false);

    let auth = use_auth();
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            business_name: business_name.get(),
            plan: plan.get(),
        };

        if let Err(message) = form.validate() {
            toasts.error("Erro", &message);
            return;
        }

        set_is_submitting.set(true);

        spawn_local(async move {
            match auth.register(form).await {
                Ok(_) => {
                    toasts.success("Cadastro realizado com sucesso!", "Bem-vindo ao VendaHub.");
                }
                Err(_) => {
                    toasts.error(
                        "Erro ao criar conta",
                        "Não foi possível criar sua conta. Tente novamente.",
                    );
                }
            }
            set_is_submitting.set(false);
        });
    };

    let plan_button = move |value: Plan| {
        view! {
            <button
                type="button"
                class="plan-option"
                class:plan-option--selected=move || plan.get() == value
                on:click=move |_| set_plan.set(value)
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__pitch-panel">
                <div class="auth-pitch">
                    <h1>"VendaHub"</h1>
                    <p>
                        "Transforme a maneira como você gerencia seu ponto de venda com nossa plataforma completa."
                    </p>
                    <ul class="auth-pitch__list">
                        <li>"Interface intuitiva e fácil de usar"</li>
                        <li>"Gestão completa de produtos e estoque"</li>
                        <li>"Atendimento rápido no ponto de venda"</li>
                        <li>"Comece grátis, evolua quando precisar"</li>
                    </ul>
                </div>
            </div>

            <div class="auth-page__form-panel">
                <div class="auth-box">
                    <h2>"Crie sua conta"</h2>
                    <p class="auth-box__hint">
                        "Já tem uma conta? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_login.run(());
                        }>"Entre aqui"</a>
                    </p>

                    <form on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="name">"Nome"</label>
                            <input
                                type="text"
                                id="name"
                                class="form__input"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                class="form__input"
                                placeholder="seu@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="password">"Senha"</label>
                            <input
                                type="password"
                                id="password"
                                class="form__input"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="confirm-password">"Confirme a senha"</label>
                            <input
                                type="password"
                                id="confirm-password"
                                class="form__input"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="business-name">"Nome do negócio"</label>
                            <input
                                type="text"
                                id="business-name"
                                class="form__input"
                                prop:value=move || business_name.get()
                                on:input=move |ev| set_business_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form__group">
                            <span class="form__label">"Plano"</span>
                            <div class="plan-options">
                                {plan_button(Plan::Free)}
                                {plan_button(Plan::Standard)}
                                {plan_button(Plan::Pro)}
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="button button--primary button--block"
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Criando conta..." } else { "Criar conta" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
