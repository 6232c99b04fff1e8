//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置 / 从已有单词表回填
//! - 数据到请求参数的转换

use leptos::prelude::*;
use tingxie_shared::WordList;

/// 单词表表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
    }

    /// 从已有单词表回填（编辑场景）
    pub fn load(&self, list: &WordList) {
        self.name.set(list.name.clone());
        self.description
            .set(list.description.clone().unwrap_or_default());
    }

    /// 描述字段：空白视为未填写
    pub fn description_opt(&self) -> Option<String> {
        let description = self.description.get();
        if description.trim().is_empty() {
            None
        } else {
            Some(description)
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
