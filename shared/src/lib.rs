use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod date;
pub mod protocol;

pub use date::{Date, Timestamp};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const API_PREFIX: &str = "/api/v1";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// SRS 等级范围为 0..=SRS_MAX_LEVEL，由后端调度算法维护
pub const SRS_MAX_LEVEL: u8 = 5;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 当前登录用户
///
/// 登录/注册成功后随令牌一起持久化到 LocalStorage。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

/// 认证成功响应：令牌 + 用户信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// 单词表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordList {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub user_id: i64,
    #[serde(default)]
    pub word_count: u32,
}

/// 练习单元：一个待拼写的单词
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word_id: i64,
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub srs_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review: Option<Timestamp>,
}

impl Word {
    /// 该单词是否已到复习时间
    ///
    /// `next_review` 为空表示从未复习过，视为到期。
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.next_review {
            Some(ts) => ts <= now,
            None => true,
        }
    }
}

/// 一次拼写提交的判定结果（由后端评分）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeOutcome {
    pub correct: bool,
    pub correct_spelling: String,
    #[serde(default)]
    pub mistake_patterns: Vec<MistakePattern>,
}

/// SRS 聚合快照：各等级单词数与到期数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SrsStats {
    /// 等级 (0..=5) -> 单词数
    #[serde(default)]
    pub level_counts: BTreeMap<u8, u32>,
    pub total_words: u32,
    pub total_due: u32,
}

impl SrsStats {
    /// 指定等级的单词数，缺失等级按 0 计
    pub fn count_at(&self, level: u8) -> u32 {
        self.level_counts.get(&level).copied().unwrap_or(0)
    }
}

/// 后端归类出的拼写错误模式（只读分析记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistakePattern {
    pub pattern_type: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub count: u32,
    /// 可选的模型生成分析文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// 拼写规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingRule {
    pub id: i64,
    pub title: String,
    pub rule_text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// 单个单词表的练习统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeListStats {
    pub list_id: i64,
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub accuracy: f32,
}

/// CSV 导入结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSummary {
    pub list: WordList,
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
}

/// 语音生成结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsSummary {
    pub generated: u32,
    #[serde(default)]
    pub failed: u32,
}

/// 服务端错误响应体
///
/// 展示文案优先取 `detail`，其次 `message`，两者都缺失时由客户端回退到
/// 原始响应文本。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// 提取人类可读的错误文案
    pub fn into_message(self) -> Option<String> {
        self.detail.or(self.message)
    }
}
