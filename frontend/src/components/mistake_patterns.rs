use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::icons::*;
use crate::web::AbortGuard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::MistakePattern;

/// 错误模式分析页
///
/// 模式由服务端归类（含可选的模型分析文本），这里只读展示。
#[component]
pub fn MistakePatternsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()),
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (patterns, set_patterns) = signal(Vec::<MistakePattern>::new());
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(Option::<String>::None);

    let load_patterns = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.mistake_patterns().await {
                    Ok(data) => set_patterns.set(data),
                    Err(e) => error.set(Some(format!("加载错误模式失败: {e}"))),
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load_patterns = load_patterns.clone();
        Effect::new(move |_| {
            load_patterns();
        });
    }

    let is_empty = move || patterns.with(|p| p.is_empty());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">"错误模式分析"</a>
                    </div>
                    <div class="flex-none">
                        <button on:click=move |_| load_patterns() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                            <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                    </div>
                </div>

                <ErrorAlert error=error />

                <Show when=move || loading.get() && is_empty()>
                    <div class="text-center py-16 text-base-content/50">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                </Show>

                <Show when=move || !loading.get() && is_empty()>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center">
                            <Check attr:class="h-12 w-12 text-success" />
                            <h2 class="card-title">"还没有发现错误模式"</h2>
                            <p class="text-base-content/70">"多练几轮听写，系统会归类你的常见拼写错误。"</p>
                        </div>
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <For
                        each=move || patterns.get()
                        key=|p| p.pattern_type.clone()
                        children=move |pattern| {
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body space-y-2">
                                        <div class="flex items-center justify-between">
                                            <h2 class="card-title text-base">{pattern.pattern_type.clone()}</h2>
                                            <span class="badge badge-warning">{format!("{} 次", pattern.count)}</span>
                                        </div>
                                        <p class="text-base-content/80 text-sm">{pattern.description.clone()}</p>

                                        <Show when={
                                            let has_examples = !pattern.examples.is_empty();
                                            move || has_examples
                                        }>
                                            <div class="flex gap-2 flex-wrap">
                                                {pattern
                                                    .examples
                                                    .iter()
                                                    .map(|e| view! {
                                                        <span class="badge badge-ghost font-mono">{e.clone()}</span>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>

                                        {pattern.analysis.clone().map(|analysis| view! {
                                            <div class="bg-base-200 rounded-lg p-3 text-sm text-base-content/70">
                                                {analysis}
                                            </div>
                                        })}
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
