use crate::api::ApiClient;
use crate::auth::{logout, use_auth};
use crate::components::alert::Notice;
use crate::components::icons::*;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{AbortGuard, Interval};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::{SRS_MAX_LEVEL, SrsStats};

/// 到期数自动刷新间隔（毫秒）
const STATS_REFRESH_MS: u32 = 60_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 绑定视图生命周期的客户端：页面卸载时中止在途请求。
    // 守卫存入局部 arena，随组件销毁一起 drop（JS 句柄非 Send，
    // 不能交给 on_cleanup）。
    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()), // 路由守卫会立即重定向
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (stats, set_stats) = signal(SrsStats::default());
    let (loading_stats, set_loading_stats) = signal(true);
    let notice = RwSignal::new(Option::<(String, bool)>::None);
    let (generating, set_generating) = signal(false);

    let load_stats = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.srs_stats().await {
                    Ok(data) => set_stats.set(data),
                    Err(e) => notice.set(Some((format!("加载统计失败: {e}"), true))),
                }
                set_loading_stats.set(false);
            });
        }
    };

    // 初始加载
    {
        let load_stats = load_stats.clone();
        Effect::new(move |_| {
            load_stats();
        });
    }

    // 到期数随时间变化，定时刷新快照；Interval 随组件销毁自动清除
    {
        let load_stats = load_stats.clone();
        let _refresh = StoredValue::new_local(Interval::new(STATS_REFRESH_MS, move || load_stats()));
    }

    let handle_generate_all = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            set_generating.set(true);
            spawn_local(async move {
                match api.generate_all_audio().await {
                    Ok(summary) => notice.set(Some((
                        format!("语音生成完成: 成功 {}，失败 {}", summary.generated, summary.failed),
                        false,
                    ))),
                    Err(e) => notice.set(Some((format!("语音生成失败: {e}"), true))),
                }
                set_generating.set(false);
            });
        }
    };

    let on_logout = move |_| {
        // 导航由路由服务的认证状态监听自动处理
        logout(&auth);
    };

    let user_email = move || {
        auth.state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Notice notice=notice />

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <GraduationCap attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"听写练习"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">{user_email}</span>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            on:click=handle_generate_all
                            disabled=move || generating.get()
                            class="btn btn-outline gap-2"
                        >
                            <Headphones attr:class="h-4 w-4" />
                            {move || if generating.get() { "生成中..." } else { "补全语音" }}
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "退出登录"
                        </button>
                    </div>
                </div>

                // SRS 快照
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <BookOpen attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"单词总数"</div>
                        <div class="stat-value text-primary">{move || stats.get().total_words}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-warning">
                            <RefreshCw attr:class=move || if loading_stats.get() { "h-8 w-8 animate-spin" } else { "h-8 w-8" } />
                        </div>
                        <div class="stat-title">"待复习"</div>
                        <div class="stat-value text-warning">{move || stats.get().total_due}</div>
                        <div class="stat-desc">"到期即出现在复习队列"</div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">"掌握度分布"</div>
                        <div class="stat-desc mt-2 flex gap-2 flex-wrap">
                            {move || {
                                let snapshot = stats.get();
                                (0..=SRS_MAX_LEVEL)
                                    .map(|level| view! {
                                        <span class="badge badge-outline">
                                            {format!("L{level}: {}", snapshot.count_at(level))}
                                        </span>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>

                // 快捷入口
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::WordLists)>
                        <div class="card-body">
                            <BookOpen attr:class="h-8 w-8 text-primary" />
                            <h2 class="card-title">"单词表"</h2>
                            <p class="text-base-content/70">"管理单词表，导入 CSV，开始听写"</p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::Review)>
                        <div class="card-body">
                            <RefreshCw attr:class="h-8 w-8 text-warning" />
                            <h2 class="card-title">"间隔复习"</h2>
                            <p class="text-base-content/70">
                                {move || format!("{} 个单词已到期", stats.get().total_due)}
                            </p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::MistakePatterns)>
                        <div class="card-body">
                            <Pencil attr:class="h-8 w-8 text-error" />
                            <h2 class="card-title">"错误分析"</h2>
                            <p class="text-base-content/70">"查看常犯的拼写错误模式"</p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| router.navigate(AppRoute::SpellingRules)>
                        <div class="card-body">
                            <Check attr:class="h-8 w-8 text-success" />
                            <h2 class="card-title">"拼写规则"</h2>
                            <p class="text-base-content/70">"整理拼写规律，练习时少踩坑"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
