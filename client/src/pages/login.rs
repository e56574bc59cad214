//! Login page: email + password against the remote auth endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{PASSWORD_MIN_LENGTH, submit_login};
use crate::app::SIGNUP_PATH;
use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;
use crate::util::session::BrowserTokenStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let request = LoginRequest { email: email.get_untracked(), password: password.get_untracked() };
        error.set(String::new());
        success.set(String::new());
        loading.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_login(&ApiClient::default(), &BrowserTokenStore, &request, |path| {
                navigate(path, NavigateOptions::default());
            })
            .await;
            match outcome {
                Ok(message) => success.set(message.to_owned()),
                Err(message) => error.set(message),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Login System"</h1>
                <p class="auth-card__subtitle">
                    "Your gateway to seamless transactions and easy payments."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="enter your email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="enter your password"
                            minlength=PASSWORD_MIN_LENGTH.to_string()
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="auth-form__row">
                        <label class="auth-remember">
                            <input type="checkbox"/>
                            " Remember me"
                        </label>
                        <a href=SIGNUP_PATH class="auth-link">"Sign Up"</a>
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="auth-message auth-message--success">{move || success.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
