use crate::auth::use_app;
use crate::web::router::use_router;
use campaign_console_shared::LoginCredentials;
use campaign_console_shared::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let error = move || store.auth.get().error;
    let is_loading = move || store.auth.get().is_loading;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginCredentials::new(username.get(), password.get());
        let auth = store.context().auth;

        spawn_local(async move {
            // 失败信息已写入 AuthState.error
            if auth.login(&credentials).await.is_ok() {
                router.navigate(AppRoute::auth_success_redirect().to_path());
            }
        });
    };

    view! {
        <form class="login" on:submit=on_submit>
            <h1>"Campaign Console"</h1>
            <Show when=move || error().is_some()>
                <p class="error">{move || error().unwrap_or_default()}</p>
            </Show>
            <input
                type="text"
                placeholder="Username"
                prop:value=username
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=is_loading>
                {move || if is_loading() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
