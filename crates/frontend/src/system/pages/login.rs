use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::notify::use_toasts;
use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage(
    /// Switch to the registration screen
    on_register: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let auth = use_auth();
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        if email_val.is_empty() || password_val.is_empty() {
            toasts.error("Erro", "Por favor, preencha todos os campos.");
            return;
        }

        set_is_submitting.set(true);

        spawn_local(async move {
            match auth.login(email_val, password_val).await {
                Ok(_) => {
                    // Auth state flips to Authenticated, which switches
                    // the app to the main layout.
                    toasts.success("Login realizado com sucesso!", "Bem-vindo ao VendaHub.");
                }
                Err(_) => {
                    toasts.error(
                        "Erro ao fazer login",
                        "Verifique suas credenciais e tente novamente.",
                    );
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__form-panel">
                <div class="auth-box">
                    <h2>"Entre na sua conta"</h2>
                    <p class="auth-box__hint">
                        "Ou "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_register.run(());
                        }>"crie uma conta gratuita"</a>
                    </p>

                    <form on:submit=on_submit>
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
                                placeholder="******"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary button--block"
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                    </form>
                </div>
            </div>

            <div class="auth-page__pitch-panel">
                <div class="auth-pitch">
                    <h1>"VendaHub"</h1>
                    <p>
                        "A solução completa para gerenciar seu ponto de venda, estoque, produtos e muito mais."
                    </p>
                    <div class="auth-pitch__features">
                        <div class="auth-pitch__feature">
                            <h3>"Controle de estoque"</h3>
                            <p>"Gerencie seu estoque em tempo real com alertas inteligentes."</p>
                        </div>
                        <div class="auth-pitch__feature">
                            <h3>"Gestão de vendas"</h3>
                            <p>"Acompanhe suas vendas e visualize relatórios detalhados."</p>
                        </div>
                        <div class="auth-pitch__feature">
                            <h3>"Gestão de clientes"</h3>
                            <p>"Mantenha um relacionamento próximo com seus clientes."</p>
                        </div>
                        <div class="auth-pitch__feature">
                            <h3>"Gerenciamento de fornecedores"</h3>
                            <p>"Organize seus fornecedores e melhore seus processos."</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
