//! 拼写规则端点

use super::ApiClient;
use tingxie_shared::SpellingRule;
use tingxie_shared::protocol::{
    CreateSpellingRuleRequest, DeleteSpellingRuleRequest, ListSpellingRulesRequest,
    UpdateSpellingRuleRequest,
};

impl ApiClient {
    /// 获取全部拼写规则
    pub async fn list_spelling_rules(&self) -> Result<Vec<SpellingRule>, String> {
        self.send(&ListSpellingRulesRequest).await
    }

    /// 新建拼写规则
    pub async fn create_spelling_rule(
        &self,
        title: String,
        rule_text: String,
        examples: Vec<String>,
    ) -> Result<SpellingRule, String> {
        self.send(&CreateSpellingRuleRequest {
            title,
            rule_text,
            examples,
        })
        .await
    }

    /// 更新拼写规则
    pub async fn update_spelling_rule(
        &self,
        id: i64,
        title: String,
        rule_text: String,
        examples: Vec<String>,
    ) -> Result<SpellingRule, String> {
        self.send(&UpdateSpellingRuleRequest {
            id,
            title,
            rule_text,
            examples,
        })
        .await
    }

    /// 删除拼写规则
    pub async fn delete_spelling_rule(&self, id: i64) -> Result<(), String> {
        self.send(&DeleteSpellingRuleRequest { id }).await
    }
}
