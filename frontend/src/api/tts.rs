//! 语音生成端点
//!
//! 音频由服务端生成；这里只触发任务并展示结果。

use super::ApiClient;
use tingxie_shared::TtsSummary;
use tingxie_shared::protocol::{GenerateAllAudioRequest, GenerateListAudioRequest};

impl ApiClient {
    /// 为所有缺少音频的单词生成语音
    pub async fn generate_all_audio(&self) -> Result<TtsSummary, String> {
        self.send(&GenerateAllAudioRequest).await
    }

    /// 为指定单词表生成语音
    pub async fn generate_list_audio(&self, list_id: i64) -> Result<TtsSummary, String> {
        self.send(&GenerateListAudioRequest { list_id }).await
    }
}
