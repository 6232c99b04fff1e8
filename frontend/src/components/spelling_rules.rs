use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Notice};
use crate::components::icons::*;
use crate::web::AbortGuard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::SpellingRule;

mod rule_dialog;

use rule_dialog::{RuleDialog, RuleSubmission};

#[component]
pub fn SpellingRulesPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()),
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (rules, set_rules) = signal(Vec::<SpellingRule>::new());
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<(String, bool)>::None);
    // Some(None) = 新建, Some(Some(rule)) = 编辑
    let editing = RwSignal::new(Option::<Option<SpellingRule>>::None);

    let load_rules = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_spelling_rules().await {
                    Ok(data) => set_rules.set(data),
                    Err(e) => error.set(Some(format!("加载拼写规则失败: {e}"))),
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load_rules = load_rules.clone();
        Effect::new(move |_| {
            load_rules();
        });
    }

    let handle_submit = {
        let api = api.clone();
        let load_rules = load_rules.clone();
        move |(id, title, rule_text, examples): RuleSubmission| {
            let api = api.clone();
            let load_rules = load_rules.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api
                        .update_spelling_rule(id, title, rule_text, examples)
                        .await
                        .map(|_| "修改已保存"),
                    None => api
                        .create_spelling_rule(title, rule_text, examples)
                        .await
                        .map(|_| "规则已创建"),
                };
                match result {
                    Ok(msg) => {
                        notice.set(Some((msg.to_string(), false)));
                        load_rules();
                    }
                    Err(e) => notice.set(Some((format!("保存失败: {e}"), true))),
                }
            });
        }
    };

    let handle_delete = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_spelling_rule(id).await {
                    Ok(_) => {
                        notice.set(Some(("规则已删除".to_string(), false)));
                        set_rules.update(|list| list.retain(|r| r.id != id));
                    }
                    Err(e) => notice.set(Some((format!("删除失败: {e}"), true))),
                }
            });
        }
    };

    let is_empty = move || rules.with(|r| r.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <Notice notice=notice />

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">"拼写规则"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <button class="btn btn-primary gap-2" on:click=move |_| editing.set(Some(None))>
                            <Plus attr:class="h-4 w-4" /> "新建规则"
                        </button>
                    </div>
                </div>

                <ErrorAlert error=error />
                <RuleDialog editing=editing on_submit=handle_submit />

                <Show when=move || loading.get() && is_empty()>
                    <div class="text-center py-16 text-base-content/50">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                </Show>

                <Show when=move || !loading.get() && is_empty()>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center">
                            <BookOpen attr:class="h-12 w-12 text-primary" />
                            <h2 class="card-title">"还没有拼写规则"</h2>
                            <p class="text-base-content/70">"把常用的拼写规律记下来，听写时更容易想起。"</p>
                        </div>
                    </div>
                </Show>

                <div class="space-y-4">
                    <For
                        each=move || rules.get()
                        key=|r| r.id
                        children=move |rule| {
                            let handle_delete = handle_delete.clone();
                            let id = rule.id;
                            let edit_target = rule.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body space-y-2">
                                        <div class="flex items-center justify-between">
                                            <h2 class="card-title text-base">{rule.title.clone()}</h2>
                                            <div class="flex gap-1">
                                                <button class="btn btn-ghost btn-sm btn-square"
                                                    on:click=move |_| editing.set(Some(Some(edit_target.clone())))>
                                                    <Pencil attr:class="h-4 w-4" />
                                                </button>
                                                <button class="btn btn-ghost btn-sm btn-square text-error"
                                                    on:click=move |_| handle_delete(id)>
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </div>
                                        </div>
                                        <p class="text-base-content/80">{rule.rule_text.clone()}</p>
                                        <Show when={
                                            let has_examples = !rule.examples.is_empty();
                                            move || has_examples
                                        }>
                                            <div class="flex gap-2 flex-wrap">
                                                {rule
                                                    .examples
                                                    .iter()
                                                    .map(|e| view! {
                                                        <span class="badge badge-ghost font-mono">{e.clone()}</span>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
