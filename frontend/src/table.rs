//! 单词表格模块 - 领域模型
//!
//! 对已拉取的单词数组做内存内排序/过滤/分页，
//! 纯函数实现，不依赖 DOM，由详情页直接消费。
//!
//! - 排序：按列稳定排序，同列再点切换升降序
//! - 过滤：对单词/释义/例句做大小写不敏感的子串匹配
//! - 分页：固定每页 10 行，页码越界时收敛到最后一页

use std::cmp::Ordering;
use tingxie_shared::Word;

/// 固定页大小
pub const PAGE_SIZE: usize = 10;

/// 排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Word,
    Definition,
    SrsLevel,
    NextReview,
}

/// 表格视图状态
#[derive(Debug, Clone, PartialEq)]
pub struct WordTableState {
    pub sort_key: SortKey,
    pub ascending: bool,
    pub query: String,
    pub page: usize,
}

impl Default for WordTableState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Word,
            ascending: true,
            query: String::new(),
            page: 0,
        }
    }
}

/// 一页渲染数据
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Word>,
    pub total_matches: usize,
    pub page_count: usize,
    /// 收敛后的当前页码
    pub page: usize,
}

impl WordTableState {
    /// 点击列头：同列翻转方向，换列恢复升序；回到第一页
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.ascending = !self.ascending;
        } else {
            self.sort_key = key;
            self.ascending = true;
        }
        self.page = 0;
    }

    /// 更新搜索词；回到第一页
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 0;
    }

    /// 翻页（由 `apply` 再做越界收敛）
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// 单词是否命中搜索词（大小写不敏感的子串匹配）
    pub fn matches(word: &Word, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        word.word.to_lowercase().contains(&needle)
            || word.definition.to_lowercase().contains(&needle)
            || word
                .example
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle))
    }

    fn compare(&self, a: &Word, b: &Word) -> Ordering {
        match self.sort_key {
            SortKey::Word => a.word.to_lowercase().cmp(&b.word.to_lowercase()),
            SortKey::Definition => a.definition.to_lowercase().cmp(&b.definition.to_lowercase()),
            SortKey::SrsLevel => a.srs_level.cmp(&b.srs_level),
            SortKey::NextReview => match (a.next_review, b.next_review) {
                (Some(x), Some(y)) => x.cmp(&y),
                // 升序时无复习日期的词排最后
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    /// 过滤 -> 稳定排序 -> 分页
    pub fn apply(&self, words: &[Word]) -> TablePage {
        let mut rows: Vec<Word> = words
            .iter()
            .filter(|w| Self::matches(w, &self.query))
            .cloned()
            .collect();
        // Vec::sort_by 是稳定排序，相等键保持原有相对顺序；
        // 降序通过整体反转实现，保证与升序严格互为逆序
        rows.sort_by(|a, b| self.compare(a, b));
        if !self.ascending {
            rows.reverse();
        }

        let total_matches = rows.len();
        let page_count = total_matches.div_ceil(PAGE_SIZE);
        let page = self.page.min(page_count.saturating_sub(1));

        let start = page * PAGE_SIZE;
        let rows = rows
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect();

        TablePage {
            rows,
            total_matches,
            page_count,
            page,
        }
    }
}

#[cfg(test)]
mod tests;
