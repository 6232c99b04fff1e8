use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::alert::{ErrorAlert, Notice};
use crate::components::icons::*;
use crate::web::AbortGuard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tingxie_shared::WordList;
use web_sys::File;

mod edit_list_dialog;
mod form_state;
mod upload_dialog;

use edit_list_dialog::{AddListDialog, EditListDialog};
use upload_dialog::UploadListDialog;

#[component]
pub fn WordListsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (api, abort_guard) = match auth.state.get_untracked().api {
        Some(api) => api.scoped(),
        None => (ApiClient::new(None), AbortGuard::new()),
    };
    let _abort = StoredValue::new_local(abort_guard);

    let (lists, set_lists) = signal(Vec::<WordList>::new());
    let (loading, set_loading) = signal(true);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<(String, bool)>::None);
    let editing = RwSignal::new(Option::<WordList>::None);

    let load_lists = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_word_lists().await {
                    Ok(data) => set_lists.set(data),
                    Err(e) => error.set(Some(format!("加载单词表失败: {e}"))),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    {
        let load_lists = load_lists.clone();
        Effect::new(move |_| {
            load_lists();
        });
    }

    let handle_add = {
        let api = api.clone();
        let load_lists = load_lists.clone();
        move |(name, description): (String, Option<String>)| {
            let api = api.clone();
            let load_lists = load_lists.clone();
            spawn_local(async move {
                match api.create_word_list(name, description).await {
                    Ok(_) => {
                        notice.set(Some(("单词表已创建".to_string(), false)));
                        load_lists();
                    }
                    Err(e) => notice.set(Some((format!("创建失败: {e}"), true))),
                }
            });
        }
    };

    let handle_save = {
        let api = api.clone();
        let load_lists = load_lists.clone();
        move |(id, name, description): (i64, String, Option<String>)| {
            let api = api.clone();
            let load_lists = load_lists.clone();
            spawn_local(async move {
                match api.update_word_list(id, name, description).await {
                    Ok(_) => {
                        notice.set(Some(("修改已保存".to_string(), false)));
                        load_lists();
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
                match api.delete_word_list(id).await {
                    Ok(_) => {
                        notice.set(Some(("单词表已删除".to_string(), false)));
                        set_lists.update(|list| list.retain(|l| l.id != id));
                    }
                    Err(e) => notice.set(Some((format!("删除失败: {e}"), true))),
                }
            });
        }
    };

    let handle_upload = {
        let api = api.clone();
        let load_lists = load_lists.clone();
        move |(name, file): (String, File)| {
            let api = api.clone();
            let load_lists = load_lists.clone();
            notice.set(Some(("正在导入...".to_string(), false)));
            spawn_local(async move {
                match api.upload_csv(name, file).await {
                    Ok(summary) => {
                        notice.set(Some((
                            format!(
                                "「{}」导入完成: {} 个单词{}",
                                summary.list.name,
                                summary.imported,
                                if summary.skipped > 0 {
                                    format!("，跳过 {} 行", summary.skipped)
                                } else {
                                    String::new()
                                }
                            ),
                            false,
                        )));
                        load_lists();
                    }
                    Err(e) => notice.set(Some((format!("导入失败: {e}"), true))),
                }
            });
        }
    };

    let total_lists = move || lists.with(|l| l.len());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Notice notice=notice />

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                            <ChevronLeft attr:class="h-5 w-5" />
                        </button>
                        <a class="btn btn-ghost text-xl">"单词表"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <UploadListDialog on_upload=handle_upload />
                        <AddListDialog on_add=handle_add />
                    </div>
                </div>

                <ErrorAlert error=error />
                <EditListDialog editing=editing on_save=handle_save />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"我的单词表"</h3>
                                <p class="text-base-content/70 text-sm">"点击表名进入详情，从详情页开始听写。"</p>
                            </div>
                            <button on:click=move |_| load_lists() disabled=move || loading.get() class="btn btn-ghost btn-circle">
                                <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                            </button>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"名称"</th>
                                        <th class="hidden md:table-cell">"描述"</th>
                                        <th>"单词数"</th>
                                        <th class="hidden md:table-cell">"创建时间"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || total_lists() == 0 && !loading.get()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "还没有单词表。新建一个或导入 CSV 开始。"
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading.get() && total_lists() == 0>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || lists.get()
                                        key=|l| l.id
                                        children=move |list| {
                                            let handle_delete = handle_delete.clone();
                                            let id = list.id;
                                            let edit_target = list.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <a class="link link-hover font-bold"
                                                            on:click=move |_| router.navigate(AppRoute::WordListDetail(id))>
                                                            {list.name.clone()}
                                                        </a>
                                                    </td>
                                                    <td class="hidden md:table-cell text-base-content/70">
                                                        {list.description.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>
                                                        <span class="badge badge-neutral">{list.word_count}</span>
                                                    </td>
                                                    <td class="hidden md:table-cell font-mono text-xs opacity-50">
                                                        {list.created_at.format_date()}
                                                    </td>
                                                    <td>
                                                        <div class="flex items-center gap-1 justify-end">
                                                            <button class="btn btn-primary btn-sm gap-1"
                                                                on:click=move |_| router.navigate(AppRoute::Practice(id))>
                                                                <Headphones attr:class="h-4 w-4" /> "听写"
                                                            </button>
                                                            <button class="btn btn-ghost btn-sm btn-square"
                                                                on:click=move |_| editing.set(Some(edit_target.clone()))>
                                                                <Pencil attr:class="h-4 w-4" />
                                                            </button>
                                                            <button class="btn btn-ghost btn-sm btn-square text-error"
                                                                on:click=move |_| handle_delete(id)>
                                                                <Trash2 attr:class="h-4 w-4" />
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
