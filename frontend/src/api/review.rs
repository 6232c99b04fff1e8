//! 间隔复习端点
//!
//! 调度算法在服务端；客户端只消费到期单词与聚合统计。

use super::ApiClient;
use tingxie_shared::protocol::{NextReviewRequest, SrsStatsRequest, SubmitReviewRequest};
use tingxie_shared::{SrsStats, Word};

impl ApiClient {
    /// 取下一个到期单词；None 表示当前没有待复习的词
    pub async fn next_review(&self) -> Result<Option<Word>, String> {
        self.send(&NextReviewRequest).await
    }

    /// 提交复习结果，返回调度后的单词
    pub async fn submit_review(&self, word_id: i64, correct: bool) -> Result<Word, String> {
        self.send(&SubmitReviewRequest { word_id, correct }).await
    }

    /// SRS 聚合快照
    pub async fn srs_stats(&self) -> Result<SrsStats, String> {
        self.send(&SrsStatsRequest).await
    }
}
