//! 听写练习端点

use super::ApiClient;
use tingxie_shared::protocol::{
    GetPracticeWordRequest, MistakePatternsRequest, PracticeStatsRequest, SubmitPracticeRequest,
};
use tingxie_shared::{MistakePattern, PracticeListStats, PracticeOutcome, Word};

impl ApiClient {
    /// 取下一个练习单词；None 表示该表已练完
    pub async fn get_practice_word(&self, word_list_id: i64) -> Result<Option<Word>, String> {
        self.send(&GetPracticeWordRequest { word_list_id }).await
    }

    /// 提交一次拼写，由后端判定并返回错误模式
    pub async fn submit_practice(
        &self,
        word_id: i64,
        answer: String,
    ) -> Result<PracticeOutcome, String> {
        self.send(&SubmitPracticeRequest { word_id, answer }).await
    }

    /// 单个单词表的练习统计
    pub async fn practice_stats(&self, list_id: i64) -> Result<PracticeListStats, String> {
        self.send(&PracticeStatsRequest { list_id }).await
    }

    /// 当前用户的错误模式分析（后端归类，只读）
    pub async fn mistake_patterns(&self) -> Result<Vec<MistakePattern>, String> {
        self.send(&MistakePatternsRequest).await
    }
}
