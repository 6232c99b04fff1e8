use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::icons::*;
use crate::diff::{SegmentKind, diff_spelling};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{AbortGuard, AudioPlayer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::{PracticeOutcome, Word};

/// 拼写对比视图：多打的字符划掉，漏掉的字符以下划线插入
#[component]
fn SpellingDiff(attempt: String, correct: String) -> impl IntoView {
    let segments = diff_spelling(&attempt, &correct);
    view! {
        <span class="font-mono text-2xl tracking-wide">
            {segments
                .into_iter()
                .map(|seg| {
                    let class = match seg.kind {
                        SegmentKind::Match => "",
                        SegmentKind::Extra => "line-through text-error",
                        SegmentKind::Missing => "underline text-success",
                    };
                    view! { <span class=class>{seg.text}</span> }
                })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn PracticePage(
    /// 单词表 id（来自路由）
    list_id: i64,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()),
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (current, set_current) = signal(Option::<Word>::None);
    let (outcome, set_outcome) = signal(Option::<PracticeOutcome>::None);
    let (answer, set_answer) = signal(String::new());
    let (last_attempt, set_last_attempt) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (finished, set_finished) = signal(false);
    let (attempted, set_attempted) = signal(0u32);
    let (correct_count, set_correct_count) = signal(0u32);
    let error = RwSignal::new(Option::<String>::None);

    let player = StoredValue::new_local(AudioPlayer::new());

    let play_current = move || {
        if let Some(word) = current.get_untracked() {
            match word.audio_url {
                Some(url) => player.with_value(|p| {
                    p.play(&url, move |msg| {
                        error.set(Some(format!("播放失败: {msg}")));
                    });
                }),
                None => error.set(Some("该单词还没有语音，可在单词表页生成".to_string())),
            }
        }
    };

    let load_next = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            set_outcome.set(None);
            set_answer.set(String::new());
            spawn_local(async move {
                match api.get_practice_word(list_id).await {
                    Ok(Some(word)) => {
                        set_current.set(Some(word));
                        // 新词到达即自动播放
                        play_current();
                    }
                    Ok(None) => {
                        set_current.set(None);
                        set_finished.set(true);
                    }
                    Err(e) => error.set(Some(format!("取词失败: {e}"))),
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load_next = load_next.clone();
        Effect::new(move |_| {
            load_next();
        });
    }

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let Some(word) = current.get_untracked() else {
                return;
            };
            let attempt = answer.get_untracked().trim().to_string();
            if attempt.is_empty() {
                error.set(Some("先输入你听到的拼写".to_string()));
                return;
            }

            let api = api.clone();
            set_submitting.set(true);
            set_last_attempt.set(attempt.clone());
            spawn_local(async move {
                match api.submit_practice(word.word_id, attempt).await {
                    Ok(result) => {
                        set_attempted.update(|n| *n += 1);
                        if result.correct {
                            set_correct_count.update(|n| *n += 1);
                        }
                        set_outcome.set(Some(result));
                    }
                    Err(e) => error.set(Some(format!("提交失败: {e}"))),
                }
                set_submitting.set(false);
            });
        }
    };

    let next_word = {
        let load_next = load_next.clone();
        move |_| load_next()
    };

    let restart = {
        let load_next = load_next.clone();
        move |_| {
            set_finished.set(false);
            set_attempted.set(0);
            set_correct_count.set(0);
            load_next();
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::WordListDetail(list_id))>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">"听写练习"</a>
                    </div>
                    <div class="flex-none">
                        <span class="badge badge-neutral">
                            {move || format!("{} / {}", correct_count.get(), attempted.get())}
                        </span>
                    </div>
                </div>

                <ErrorAlert error=error />

                // 练完收尾
                <Show when=move || finished.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center space-y-2">
                            <Check attr:class="h-12 w-12 text-success" />
                            <h2 class="card-title">"这一轮练完了！"</h2>
                            <p class="text-base-content/70">
                                {move || format!("本次共 {} 词，拼对 {} 个", attempted.get(), correct_count.get())}
                            </p>
                            <div class="card-actions mt-4">
                                <button class="btn btn-ghost" on:click=move |_| router.navigate(AppRoute::WordListDetail(list_id))>
                                    "返回单词表"
                                </button>
                                <button class="btn btn-primary" on:click=restart.clone()>
                                    "再来一轮"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>

                // 听写主卡片
                <Show when=move || !finished.get()>
                    {
                        let next_word = next_word.clone();
                        let on_submit = on_submit.clone();
                        view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center space-y-4">
                            <Show
                                when=move || !loading.get()
                                fallback=|| view! {
                                    <span class="loading loading-spinner loading-lg text-primary"></span>
                                }
                            >
                                <button class="btn btn-circle btn-primary btn-lg" on:click=move |_| play_current()>
                                    <Volume2 attr:class="h-8 w-8" />
                                </button>
                                <p class="text-base-content/70">
                                    {move || {
                                        current
                                            .get()
                                            .map(|w| w.definition)
                                            .unwrap_or_default()
                                    }}
                                </p>

                                // 提交后展示判定结果
                                {
                                    let next_word = next_word.clone();
                                    let on_submit = on_submit.clone();
                                    move || match outcome.get() {
                                    Some(result) => {
                                        let correct_spelling = result.correct_spelling.clone();
                                        let is_correct = result.correct;
                                        view! {
                                            <div class="w-full space-y-4 text-center">
                                                <div class=move || {
                                                    if is_correct {
                                                        "alert alert-success justify-center"
                                                    } else {
                                                        "alert alert-error justify-center"
                                                    }
                                                }>
                                                    {if is_correct { "拼对了！" } else { "再看看差在哪：" }}
                                                </div>

                                                <SpellingDiff
                                                    attempt=last_attempt.get_untracked()
                                                    correct=correct_spelling.clone()
                                                />
                                                <p class="text-base-content/50 text-sm font-mono">
                                                    {format!("正确拼写: {correct_spelling}")}
                                                </p>

                                                <Show when={
                                                    let has_patterns = !result.mistake_patterns.is_empty();
                                                    move || has_patterns
                                                }>
                                                    <div class="flex gap-2 flex-wrap justify-center">
                                                        {result
                                                            .mistake_patterns
                                                            .iter()
                                                            .map(|p| view! {
                                                                <span class="badge badge-warning badge-outline" title=p.description.clone()>
                                                                    {p.pattern_type.clone()}
                                                                </span>
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </Show>

                                                <button class="btn btn-primary w-full" on:click=next_word.clone()>
                                                    "下一个"
                                                </button>
                                            </div>
                                        }
                                        .into_any()
                                    }
                                    None => view! {
                                        <form class="w-full space-y-4" on:submit=on_submit.clone()>
                                            <input
                                                type="text"
                                                placeholder="输入你听到的单词"
                                                class="input input-bordered input-lg w-full text-center font-mono"
                                                autocomplete="off"
                                                on:input=move |ev| set_answer.set(event_target_value(&ev))
                                                prop:value=answer
                                            />
                                            <button
                                                type="submit"
                                                class="btn btn-primary w-full"
                                                disabled=move || submitting.get()
                                            >
                                                {move || if submitting.get() {
                                                    view! { <span class="loading loading-spinner"></span> "判定中..." }.into_any()
                                                } else {
                                                    "提交".into_any()
                                                }}
                                            </button>
                                        </form>
                                    }
                                    .into_any(),
                                }}
                            </Show>
                        </div>
                    </div>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
