use crate::auth::use_app;
use crate::web::router::use_router;
use campaign_console_shared::Campaign;
use campaign_console_shared::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let store = use_app();
    let router = use_router();

    // 进入页面时加载列表
    let campaigns = store.context().campaigns;
    spawn_local(async move {
        let _ = campaigns.fetch_campaigns().await;
    });

    let username = move || {
        store
            .auth
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let error = move || store.campaigns.get().error;
    let summary = move || {
        let state = store.campaigns.get();
        format!(
            "{} active / {} total, budget {:.2}",
            state.active_campaigns().len(),
            state.campaigns.len(),
            state.total_budget()
        )
    };

    let on_logout = move |_| {
        store.context().auth.logout();
        router.navigate(AppRoute::auth_failure_redirect().to_path());
    };

    view! {
        <div class="campaigns">
            <header>
                <span>{username}</span>
                <button on:click=on_logout>"Logout"</button>
            </header>
            <Show when=move || error().is_some()>
                <p class="error" on:click=move |_| store.context().campaigns.clear_error()>
                    {move || error().unwrap_or_default()}
                </p>
            </Show>
            <p>{summary}</p>
            <Show when=move || store.campaigns.get().is_loading>
                <p>"Loading..."</p>
            </Show>
            <ul>
                <For
                    each=move || store.campaigns.get().campaigns
                    key=|c| c.id
                    children=move |campaign: Campaign| view! { <CampaignRow id=campaign.id /> }
                />
            </ul>
        </div>
    }
}

/// 按 id 从状态信号读取，更新后整行随之刷新
#[component]
fn CampaignRow(id: i64) -> impl IntoView {
    let store = use_app();
    let campaign = Memo::new(move |_| store.campaigns.get().campaign_by_id(id).cloned());
    let field = move |f: fn(&Campaign) -> String| move || campaign.get().as_ref().map(f).unwrap_or_default();

    let on_toggle = move |_| {
        let Some(current) = campaign.get_untracked() else {
            return;
        };
        let toggled = Campaign {
            status: !current.status,
            ..current
        };
        let campaigns = store.context().campaigns;
        spawn_local(async move {
            let _ = campaigns.update_campaign(id, &toggled).await;
        });
    };
    let on_delete = move |_| {
        let campaigns = store.context().campaigns;
        spawn_local(async move {
            let _ = campaigns.delete_campaign(id).await;
        });
    };
    let is_active = move || campaign.get().is_some_and(|c| c.is_active());

    view! {
        <li>
            <strong>{field(|c| c.name.clone())}</strong>
            <span>{field(|c| format!(" {} ~ {} ", c.start_date, c.end_date))}</span>
            <span>{field(|c| format!("{:.2}", c.budget))}</span>
            <button on:click=on_toggle>
                {move || if is_active() { "Pause" } else { "Activate" }}
            </button>
            <button on:click=on_delete>"Delete"</button>
        </li>
    }
}
