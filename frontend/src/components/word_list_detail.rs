use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Notice};
use crate::components::icons::*;
use crate::table::{SortKey, WordTableState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{AbortGuard, AudioPlayer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::{Date, PracticeListStats, Word, WordList};

#[component]
pub fn WordListDetailPage(
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

    let (list, set_list) = signal(Option::<WordList>::None);
    let (words, set_words) = signal(Vec::<Word>::new());
    let (stats, set_stats) = signal(Option::<PracticeListStats>::None);
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<(String, bool)>::None);
    let (generating, set_generating) = signal(false);
    let table = RwSignal::new(WordTableState::default());
    let similar = RwSignal::new(Option::<(Word, Vec<Word>)>::None);

    // 页面唯一的音频元素：重复播放请求 last-write-wins
    let player = StoredValue::new_local(AudioPlayer::new());

    // 排序/过滤/分页都在内存里对已拉取的数组做
    let page_data = Memo::new(move |_| words.with(|w| table.get().apply(w)));

    let load_all = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_word_list(list_id).await {
                    Ok(meta) => set_list.set(Some(meta)),
                    Err(e) => error.set(Some(format!("加载单词表失败: {e}"))),
                }
                match api.list_words(list_id).await {
                    Ok(data) => set_words.set(data),
                    Err(e) => error.set(Some(format!("加载单词失败: {e}"))),
                }
                // 统计失败不挡主表
                if let Ok(data) = api.practice_stats(list_id).await {
                    set_stats.set(Some(data));
                }
                set_loading.set(false);
            });
        }
    };

    {
        let load_all = load_all.clone();
        Effect::new(move |_| {
            load_all();
        });
    }

    let play_word = move |word: &Word| match &word.audio_url {
        Some(url) => {
            let url = url.clone();
            player.with_value(|p| {
                p.play(&url, move |msg| {
                    notice.set(Some((format!("播放失败: {msg}"), true)));
                });
            });
        }
        None => notice.set(Some(("该单词还没有语音，可先生成".to_string(), true))),
    };

    let show_similar = {
        let api = api.clone();
        move |word: Word| {
            let api = api.clone();
            spawn_local(async move {
                match api.similar_words(word.word_id).await {
                    Ok(list) => similar.set(Some((word, list))),
                    Err(e) => notice.set(Some((format!("查询相近单词失败: {e}"), true))),
                }
            });
        }
    };

    let handle_generate = {
        let api = api.clone();
        let load_all = load_all.clone();
        move |_| {
            let api = api.clone();
            let load_all = load_all.clone();
            set_generating.set(true);
            spawn_local(async move {
                match api.generate_list_audio(list_id).await {
                    Ok(summary) => {
                        notice.set(Some((
                            format!("语音生成完成: 成功 {}，失败 {}", summary.generated, summary.failed),
                            false,
                        )));
                        // 重新拉取以拿到新的音频地址
                        load_all();
                    }
                    Err(e) => notice.set(Some((format!("语音生成失败: {e}"), true))),
                }
                set_generating.set(false);
            });
        }
    };

    // 列头排序指示
    let sort_indicator = move |key: SortKey| {
        let state = table.get();
        if state.sort_key != key {
            ""
        } else if state.ascending {
            " ▲"
        } else {
            " ▼"
        }
    };
    let toggle_sort = move |key: SortKey| {
        table.update(|t| t.toggle_sort(key));
    };

    let title = move || {
        list.get()
            .map(|l| l.name)
            .unwrap_or_else(|| "单词表".to_string())
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Notice notice=notice />

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::WordLists)>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">{title}</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || format!("{} 个单词", words.with(|w| w.len()))}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=handle_generate disabled=move || generating.get() class="btn btn-outline gap-2">
                            <Headphones attr:class="h-4 w-4" />
                            {move || if generating.get() { "生成中..." } else { "生成语音" }}
                        </button>
                        <button class="btn btn-primary gap-2" on:click=move |_| router.navigate(AppRoute::Practice(list_id))>
                            <Volume2 attr:class="h-4 w-4" /> "开始听写"
                        </button>
                    </div>
                </div>

                <ErrorAlert error=error />

                // 练习统计条
                <Show when=move || stats.get().is_some()>
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-title">"练习次数"</div>
                            <div class="stat-value text-primary">
                                {move || stats.get().map(|s| s.total_attempts).unwrap_or(0)}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"拼对次数"</div>
                            <div class="stat-value text-success">
                                {move || stats.get().map(|s| s.correct_attempts).unwrap_or(0)}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"正确率"</div>
                            <div class="stat-value text-secondary">
                                {move || {
                                    stats
                                        .get()
                                        .map(|s| format!("{:.0}%", s.accuracy * 100.0))
                                        .unwrap_or_else(|| "-".to_string())
                                }}
                            </div>
                        </div>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2 gap-4 flex-wrap">
                            <div>
                                <h3 class="card-title">"单词"</h3>
                                <p class="text-base-content/70 text-sm">
                                    {move || {
                                        let page = page_data.get();
                                        format!("{} 个匹配", page.total_matches)
                                    }}
                                </p>
                            </div>
                            <input
                                type="text"
                                placeholder="搜索单词 / 释义 / 例句"
                                class="input input-bordered w-full max-w-xs"
                                prop:value=move || table.get().query
                                on:input=move |ev| table.update(|t| t.set_query(event_target_value(&ev)))
                            />
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th></th>
                                        <th class="cursor-pointer select-none" on:click=move |_| toggle_sort(SortKey::Word)>
                                            {move || format!("单词{}", sort_indicator(SortKey::Word))}
                                        </th>
                                        <th class="cursor-pointer select-none" on:click=move |_| toggle_sort(SortKey::Definition)>
                                            {move || format!("释义{}", sort_indicator(SortKey::Definition))}
                                        </th>
                                        <th class="hidden md:table-cell cursor-pointer select-none" on:click=move |_| toggle_sort(SortKey::SrsLevel)>
                                            {move || format!("掌握度{}", sort_indicator(SortKey::SrsLevel))}
                                        </th>
                                        <th class="hidden md:table-cell cursor-pointer select-none" on:click=move |_| toggle_sort(SortKey::NextReview)>
                                            {move || format!("下次复习{}", sort_indicator(SortKey::NextReview))}
                                        </th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || page_data.get().total_matches == 0 && !loading.get()>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                "没有匹配的单词。"
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading.get() && words.with(|w| w.is_empty())>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || page_data.get().rows
                                        key=|w| w.word_id
                                        children=move |word| {
                                            let show_similar = show_similar.clone();
                                            let has_audio = word.audio_url.is_some();
                                            let no_audio = !has_audio;
                                            let play_target = word.clone();
                                            let similar_target = word.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-circle"
                                                            class=("text-primary", has_audio)
                                                            class=("opacity-30", no_audio)
                                                            on:click=move |_| play_word(&play_target)
                                                        >
                                                            <Volume2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </td>
                                                    <td class="font-mono font-bold">{word.word.clone()}</td>
                                                    <td class="text-base-content/80">{word.definition.clone()}</td>
                                                    <td class="hidden md:table-cell">
                                                        <span class="badge badge-outline">{format!("L{}", word.srs_level)}</span>
                                                    </td>
                                                    <td class="hidden md:table-cell font-mono text-xs">
                                                        {if word.is_due(Date::now_timestamp()) {
                                                            view! { <span class="text-error">"已到期"</span> }.into_any()
                                                        } else {
                                                            view! {
                                                                <span class="opacity-50">
                                                                    {word
                                                                        .next_review
                                                                        .map(|ts| ts.format_date())
                                                                        .unwrap_or_else(|| "-".to_string())}
                                                                </span>
                                                            }
                                                            .into_any()
                                                        }}
                                                    </td>
                                                    <td>
                                                        <button class="btn btn-ghost btn-sm"
                                                            on:click=move |_| show_similar(similar_target.clone())>
                                                            "相近词"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>

                        // 分页控件
                        <div class="flex items-center justify-center gap-4 p-4">
                            <button
                                class="btn btn-ghost btn-sm btn-circle"
                                disabled=move || page_data.get().page == 0
                                on:click=move |_| {
                                    let current = page_data.get_untracked().page;
                                    table.update(|t| t.set_page(current.saturating_sub(1)));
                                }
                            >
                                <ChevronLeft attr:class="h-4 w-4" />
                            </button>
                            <span class="text-sm text-base-content/70">
                                {move || {
                                    let page = page_data.get();
                                    format!("{} / {}", page.page + 1, page.page_count.max(1))
                                }}
                            </span>
                            <button
                                class="btn btn-ghost btn-sm btn-circle"
                                disabled=move || {
                                    let page = page_data.get();
                                    page.page + 1 >= page.page_count.max(1)
                                }
                                on:click=move |_| {
                                    let current = page_data.get_untracked().page;
                                    table.update(|t| t.set_page(current + 1));
                                }
                            >
                                <ChevronRight attr:class="h-4 w-4" />
                            </button>
                        </div>
                    </div>
                </div>

                // 相近词弹层
                <Show when=move || similar.get().is_some()>
                    <div class="modal modal-open" on:click=move |_| similar.set(None)>
                        <div class="modal-box" on:click=|ev| ev.stop_propagation()>
                            <h3 class="font-bold text-lg">
                                {move || {
                                    similar
                                        .get()
                                        .map(|(word, _)| format!("与「{}」相近的单词", word.word))
                                        .unwrap_or_default()
                                }}
                            </h3>
                            <div class="py-4 space-y-2">
                                {move || {
                                    let entries = similar.get().map(|(_, list)| list).unwrap_or_default();
                                    if entries.is_empty() {
                                        view! {
                                            <p class="text-base-content/50">"没有找到拼写相近的单词。"</p>
                                        }
                                        .into_any()
                                    } else {
                                        entries
                                            .into_iter()
                                            .map(|w| view! {
                                                <div class="flex items-center gap-3">
                                                    <span class="font-mono font-bold">{w.word}</span>
                                                    <span class="text-base-content/60 text-sm">{w.definition}</span>
                                                </div>
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </div>
                            <div class="modal-action">
                                <button class="btn btn-ghost" on:click=move |_| similar.set(None)>"关闭"</button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
