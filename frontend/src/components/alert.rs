//! 页面级反馈组件
//!
//! 所有页面共用一套反馈语义：
//! - `ErrorAlert`: 可关闭的错误横幅，绑定页面的 error 信号
//! - `Notice`: 右上角浮动通知，3 秒后自动消失

use super::icons::X;
use leptos::prelude::*;

/// 可关闭的错误横幅
#[component]
pub fn ErrorAlert(
    /// 页面错误信号；Some 时展示
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="btn btn-ghost btn-xs btn-circle ml-auto" on:click=move |_| error.set(None)>
                    <X attr:class="h-4 w-4" />
                </button>
            </div>
        </Show>
    }
}

/// 浮动通知：(文案, 是否错误)
#[component]
pub fn Notice(
    /// 通知信号；Some 时展示，3 秒后自动清除
    notice: RwSignal<Option<(String, bool)>>,
) -> impl IntoView {
    // 3秒后清除通知
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(
                move || notice.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = notice.get().unwrap_or_default();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().unwrap_or_default().0}</span>
                </div>
            </div>
        </Show>
    }
}
