//! 拼写规则新建/编辑对话框

use leptos::prelude::*;
use tingxie_shared::SpellingRule;

/// 对话框提交的数据：(id, 标题, 规则内容, 示例)。id 为 None 表示新建。
pub type RuleSubmission = (Option<i64>, String, String, Vec<String>);

/// 规则表单状态
#[derive(Clone, Copy)]
struct RuleForm {
    title: RwSignal<String>,
    rule_text: RwSignal<String>,
    /// 每行一个示例
    examples: RwSignal<String>,
}

impl RuleForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            rule_text: RwSignal::new(String::new()),
            examples: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.rule_text.set(String::new());
        self.examples.set(String::new());
    }

    fn load(&self, rule: &SpellingRule) {
        self.title.set(rule.title.clone());
        self.rule_text.set(rule.rule_text.clone());
        self.examples.set(rule.examples.join("\n"));
    }

    fn example_list(&self) -> Vec<String> {
        self.examples
            .get()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 规则对话框
///
/// `editing` 为 `Some(None)` 表示新建，`Some(Some(rule))` 表示编辑。
#[component]
pub fn RuleDialog(
    editing: RwSignal<Option<Option<SpellingRule>>>,
    #[prop(into)] on_submit: Callback<RuleSubmission>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = RuleForm::new();

    Effect::new(move |_| {
        let current = editing.get();
        match &current {
            Some(Some(rule)) => form.load(rule),
            Some(None) => form.reset(),
            None => {}
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

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let id = target.map(|rule| rule.id);
        on_submit.run((id, form.title.get(), form.rule_text.get(), form.example_list()));
        editing.set(None);
        form.reset();
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| editing.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || {
                        match editing.get() {
                            Some(Some(_)) => "编辑拼写规则",
                            _ => "新建拼写规则",
                        }
                    }}
                </h3>

                <form on:submit=submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="rule_title" class="label">
                            <span class="label-text">"标题"</span>
                        </label>
                        <input id="rule_title" required
                            type="text"
                            placeholder="i 在 e 前，除非在 c 后"
                            on:input=move |ev| form.title.set(event_target_value(&ev))
                            prop:value=form.title
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="rule_text" class="label">
                            <span class="label-text">"规则说明"</span>
                        </label>
                        <textarea id="rule_text" required
                            rows="3"
                            placeholder="描述这条拼写规律以及它的例外"
                            on:input=move |ev| form.rule_text.set(event_target_value(&ev))
                            prop:value=form.rule_text
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>
                    <div class="form-control">
                        <label for="rule_examples" class="label">
                            <span class="label-text">"示例 (每行一个)"</span>
                        </label>
                        <textarea id="rule_examples"
                            rows="3"
                            placeholder="believe / receive"
                            on:input=move |ev| form.examples.set(event_target_value(&ev))
                            prop:value=form.examples
                            class="textarea textarea-bordered w-full font-mono"
                        ></textarea>
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
