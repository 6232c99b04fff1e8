//! CSV 导入对话框
//!
//! 列格式 `word,meaning,example`。解析与入库在服务端完成，
//! 这里只负责收集表名与文件。

use crate::components::icons::Upload;
use leptos::prelude::*;
use web_sys::File;

#[component]
pub fn UploadListDialog(#[prop(into)] on_upload: Callback<(String, File)>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (name, set_name) = signal(String::new());
    let (file_error, set_file_error) = signal(Option::<String>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

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

    let reset_form = move || {
        set_name.set(String::new());
        set_file_error.set(None);
        if let Some(input) = file_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let picked = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match picked {
            Some(file) => {
                on_upload.run((name.get(), file));
                set_open.set(false);
                reset_form();
            }
            None => set_file_error.set(Some("请选择 CSV 文件".to_string())),
        }
    };

    view! {
        // 触发按钮
        <button class="btn btn-outline gap-2" on:click=move |_| set_open.set(true)>
            <Upload attr:class="h-4 w-4" /> "导入 CSV"
        </button>

        // 模态框内容
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"导入 CSV"</h3>
                <p class="py-4 text-base-content/70">
                    "列格式: " <code class="font-mono">"word,meaning,example"</code>
                    "，每行一个单词。"
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || file_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || file_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="upload_name" class="label">
                            <span class="label-text">"单词表名称"</span>
                        </label>
                        <input id="upload_name" required
                            type="text"
                            placeholder="高频错词"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="upload_file" class="label">
                            <span class="label-text">"CSV 文件"</span>
                        </label>
                        <input id="upload_file" required
                            type="file"
                            accept=".csv,text/csv"
                            node_ref=file_ref
                            class="file-input file-input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>"取消"</button>
                        <button type="submit" class="btn btn-primary">"上传"</button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
