//! Signup page: registration form with local password confirmation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions::auth::{PASSWORD_MIN_LENGTH, SignupForm, submit_signup};
use crate::app::LOGIN_PATH;
use crate::net::api::ApiClient;

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());
        let snapshot = form.get_untracked();

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_signup(&ApiClient::default(), &snapshot, |path| {
                navigate(path, NavigateOptions::default());
            })
            .await;
            match outcome {
                Ok(message) => {
                    success.set(message.to_owned());
                    form.set(SignupForm::default());
                }
                Err(message) => error.set(message),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join 8 Million Businesses"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="enter your name"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="enter your email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
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
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Confirm Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="re-enter your password"
                            minlength=PASSWORD_MIN_LENGTH.to_string()
                            required
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                    </label>
                    <div class="auth-form__row">
                        <label class="auth-remember">
                            <input type="checkbox"/>
                            " Remember me"
                        </label>
                        <a href=LOGIN_PATH class="auth-link">"Sign In"</a>
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="auth-message auth-message--success">{move || success.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit">
                        "Sign Up"
                    </button>
                </form>
            </div>
        </div>
    }
}
