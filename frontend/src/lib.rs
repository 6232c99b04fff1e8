//! TingXie 前端应用
//!
//! 听写练习客户端：单词表管理、听音拼写练习、间隔复习、错误模式分析。
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `api`: 类型化 HTTP 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    mod alert;
    pub mod dashboard;
    mod icons;
    pub mod login;
    pub mod mistake_patterns;
    pub mod practice;
    pub mod register;
    pub mod review;
    pub mod spelling_rules;
    pub mod word_list_detail;
    pub mod word_lists;
}
mod diff;
mod table;

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::mistake_patterns::MistakePatternsPage;
use crate::components::practice::PracticePage;
use crate::components::register::RegisterPage;
use crate::components::review::ReviewPage;
use crate::components::spelling_rules::SpellingRulesPage;
use crate::components::word_list_detail::WordListDetailPage;
use crate::components::word_lists::WordListsPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 将 DOM 细节与页面组件隔离开。
pub(crate) mod web {
    mod abort;
    mod audio;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use abort::AbortGuard;
    pub use audio::AudioPlayer;
    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::WordLists => view! { <WordListsPage /> }.into_any(),
        AppRoute::WordListDetail(id) => view! { <WordListDetailPage list_id=id /> }.into_any(),
        AppRoute::Practice(id) => view! { <PracticePage list_id=id /> }.into_any(),
        AppRoute::Review => view! { <ReviewPage /> }.into_any(),
        AppRoute::MistakePatterns => view! { <MistakePatternsPage /> }.into_any(),
        AppRoute::SpellingRules => view! { <SpellingRulesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化会话状态（从 LocalStorage 恢复令牌和用户）
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
