//! 单词表新建/编辑对话框

use super::form_state::FormState;
use crate::components::icons::Plus;
use leptos::prelude::*;
use tingxie_shared::WordList;

/// 新建单词表对话框（含触发按钮）
#[component]
pub fn AddListDialog(#[prop(into)] on_add: Callback<(String, Option<String>)>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = FormState::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run((form.name.get(), form.description_opt()));
        set_open.set(false);
        form.reset();
    };

    view! {
        // 触发按钮
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            <Plus attr:class="h-4 w-4" /> "新建单词表"
        </button>

        // 模态框内容
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"新建单词表"</h3>
                <p class="py-4 text-base-content/70">"先建表，再导入或逐个添加单词。"</p>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label for="list_name" class="label">
                            <span class="label-text">"名称"</span>
                        </label>
                        <input id="list_name" required
                            type="text"
                            placeholder="CET-4 核心词"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=form.name
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="list_desc" class="label">
                            <span class="label-text">"描述 (可选)"</span>
                        </label>
                        <input id="list_desc"
                            type="text"
                            placeholder="备注来源或用途"
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=form.description
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>"取消"</button>
                        <button type="submit" class="btn btn-primary">"创建"</button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 编辑单词表对话框
///
/// 由页面通过 `editing` 信号驱动：Some 时打开并回填表单。
#[component]
pub fn EditListDialog(
    /// 正在编辑的单词表
    editing: RwSignal<Option<WordList>>,
    #[prop(into)] on_save: Callback<(i64, String, Option<String>)>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = FormState::new();

    Effect::new(move |_| {
        let current = editing.get();
        if let Some(list) = &current {
            form.load(list);
        }
        if let Some(dialog) = dialog_ref.get() {
            if current.is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(list) = editing.get_untracked() {
            on_save.run((list.id, form.name.get(), form.description_opt()));
        }
        editing.set(None);
        form.reset();
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| editing.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"编辑单词表"</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="edit_list_name" class="label">
                            <span class="label-text">"名称"</span>
                        </label>
                        <input id="edit_list_name" required
                            type="text"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=form.name
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="edit_list_desc" class="label">
                            <span class="label-text">"描述 (可选)"</span>
                        </label>
                        <input id="edit_list_desc"
                            type="text"
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=form.description
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| editing.set(None)>"取消"</button>
                        <button type="submit" class="btn btn-primary">"保存"</button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
