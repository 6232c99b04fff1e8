use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::icons::*;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{AbortGuard, AudioPlayer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::{SRS_MAX_LEVEL, SrsStats, Word};

#[component]
pub fn ReviewPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()),
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (current, set_current) = signal(Option::<Word>::None);
    let (revealed, set_revealed) = signal(false);
    let (stats, set_stats) = signal(SrsStats::default());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (caught_up, set_caught_up) = signal(false);
    let (reviewed, set_reviewed) = signal(0u32);
    let error = RwSignal::new(Option::<String>::None);

    let player = StoredValue::new_local(AudioPlayer::new());

    let play_current = move || {
        if let Some(word) = current.get_untracked() {
            if let Some(url) = word.audio_url {
                player.with_value(|p| {
                    p.play(&url, move |msg| {
                        error.set(Some(format!("播放失败: {msg}")));
                    });
                });
            }
        }
    };

    let load_stats = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(data) = api.srs_stats().await {
                    set_stats.set(data);
                }
            });
        }
    };

    let load_next = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            set_revealed.set(false);
            spawn_local(async move {
                match api.next_review().await {
                    Ok(Some(word)) => {
                        set_current.set(Some(word));
                        play_current();
                    }
                    Ok(None) => {
                        set_current.set(None);
                        set_caught_up.set(true);
                    }
                    Err(e) => error.set(Some(format!("取词失败: {e}"))),
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load_next = load_next.clone();
        let load_stats = load_stats.clone();
        Effect::new(move |_| {
            load_next();
            load_stats();
        });
    }

    // 记得/忘了：调度交给服务端，本地只刷新队列与统计
    let submit = {
        let api = api.clone();
        let load_next = load_next.clone();
        let load_stats = load_stats.clone();
        move |correct: bool| {
            let Some(word) = current.get_untracked() else {
                return;
            };
            let api = api.clone();
            let load_next = load_next.clone();
            let load_stats = load_stats.clone();
            set_submitting.set(true);
            spawn_local(async move {
                match api.submit_review(word.word_id, correct).await {
                    Ok(_) => {
                        set_reviewed.update(|n| *n += 1);
                        load_stats();
                        load_next();
                    }
                    Err(e) => error.set(Some(format!("提交失败: {e}"))),
                }
                set_submitting.set(false);
            });
        }
    };

    let submit_ok = {
        let submit = submit.clone();
        move |_| submit(true)
    };
    let submit_fail = {
        let submit = submit.clone();
        move |_| submit(false)
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">"间隔复习"</a>
                    </div>
                    <div class="flex-none">
                        <span class="badge badge-neutral">
                            {move || format!("本次已复习 {}", reviewed.get())}
                        </span>
                    </div>
                </div>

                <ErrorAlert error=error />

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    // 复习卡片
                    <div class="lg:col-span-2">
                        <Show when=move || caught_up.get()>
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body items-center text-center space-y-2">
                                    <Check attr:class="h-12 w-12 text-success" />
                                    <h2 class="card-title">"全部复习完成！"</h2>
                                    <p class="text-base-content/70">"当前没有到期的单词，晚点再来。"</p>
                                    <div class="card-actions mt-4">
                                        <button class="btn btn-primary" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                                            "返回仪表盘"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </Show>

                        <Show when=move || !caught_up.get()>
                            {
                                let submit_fail = submit_fail.clone();
                                let submit_ok = submit_ok.clone();
                                view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body items-center space-y-4">
                                    <Show
                                        when=move || !loading.get()
                                        fallback=|| view! {
                                            <span class="loading loading-spinner loading-lg text-primary"></span>
                                        }
                                    >
                                        <div class="flex items-center gap-3">
                                            <button class="btn btn-circle btn-primary" on:click=move |_| play_current()>
                                                <Volume2 attr:class="h-6 w-6" />
                                            </button>
                                            <span class="badge badge-outline">
                                                {move || {
                                                    current
                                                        .get()
                                                        .map(|w| format!("L{}", w.srs_level))
                                                        .unwrap_or_default()
                                                }}
                                            </span>
                                        </div>

                                        <p class="text-lg text-base-content/80 text-center">
                                            {move || current.get().map(|w| w.definition).unwrap_or_default()}
                                        </p>
                                        <Show when=move || current.get().is_some_and(|w| w.example.is_some())>
                                            <p class="text-sm text-base-content/50 italic text-center">
                                                {move || {
                                                    current
                                                        .get()
                                                        .and_then(|w| w.example)
                                                        .unwrap_or_default()
                                                }}
                                            </p>
                                        </Show>

                                        {
                                            let submit_fail = submit_fail.clone();
                                            let submit_ok = submit_ok.clone();
                                            move || if revealed.get() {
                                            view! {
                                                <div class="space-y-4 w-full text-center">
                                                    <p class="font-mono text-3xl font-bold tracking-wide">
                                                        {current.get().map(|w| w.word).unwrap_or_default()}
                                                    </p>
                                                    <div class="flex gap-4 justify-center">
                                                        <button
                                                            class="btn btn-error btn-outline gap-2"
                                                            disabled=move || submitting.get()
                                                            on:click=submit_fail.clone()
                                                        >
                                                            <X attr:class="h-4 w-4" /> "忘了"
                                                        </button>
                                                        <button
                                                            class="btn btn-success gap-2"
                                                            disabled=move || submitting.get()
                                                            on:click=submit_ok.clone()
                                                        >
                                                            <Check attr:class="h-4 w-4" /> "记得"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                            .into_any()
                                        } else {
                                            view! {
                                                <button class="btn btn-primary w-full" on:click=move |_| set_revealed.set(true)>
                                                    "显示答案"
                                                </button>
                                            }
                                            .into_any()
                                        }}
                                    </Show>
                                </div>
                            </div>
                                }
                            }
                        </Show>
                    </div>

                    // 统计侧栏
                    <div class="card bg-base-100 shadow-xl h-fit">
                        <div class="card-body">
                            <h3 class="card-title text-base">"SRS 快照"</h3>
                            <div class="stat px-0">
                                <div class="stat-title">"待复习"</div>
                                <div class="stat-value text-warning">{move || stats.get().total_due}</div>
                                <div class="stat-desc">{move || format!("共 {} 个单词", stats.get().total_words)}</div>
                            </div>
                            <div class="space-y-1">
                                {move || {
                                    let snapshot = stats.get();
                                    (0..=SRS_MAX_LEVEL)
                                        .map(|level| {
                                            let count = snapshot.count_at(level);
                                            let total = snapshot.total_words.max(1);
                                            let percent = count * 100 / total;
                                            view! {
                                                <div class="flex items-center gap-2 text-sm">
                                                    <span class="w-8 font-mono">{format!("L{level}")}</span>
                                                    <progress class="progress progress-primary flex-1" value=percent.to_string() max="100"></progress>
                                                    <span class="w-8 text-right text-base-content/60">{count.to_string()}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
