//! 接口协议模块
//!
//! 用类型把每个后端端点的请求、响应、方法和路径绑在一起，
//! 前端客户端只需要 `send(req)` 即可得到正确类型的响应。

use crate::{
    API_PREFIX, AuthSession, MistakePattern, PracticeListStats, PracticeOutcome, SpellingRule,
    SrsStats, TtsSummary, Word, WordList,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 该方法是否携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// 请求体编码方式
///
/// 认证端点要求 `application/x-www-form-urlencoded`，其余端点一律 JSON。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Form,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The body encoding (only meaningful for methods with a body).
    const ENCODING: Encoding = Encoding::Json;
    /// The URL path; may interpolate resource ids.
    fn path(&self) -> String;
}

/// 将请求序列化为 `application/x-www-form-urlencoded` 字符串
///
/// 仅支持扁平的字符串/数值/布尔字段，嵌套结构会报错。
pub fn form_urlencode<T: Serialize>(value: &T) -> Result<String, String> {
    let json = serde_json::to_value(value).map_err(|e| e.to_string())?;
    let obj = json
        .as_object()
        .ok_or_else(|| "form body must be a flat object".to_string())?;

    let mut pairs = Vec::with_capacity(obj.len());
    for (key, val) in obj {
        let raw = match val {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => continue,
            other => return Err(format!("unsupported form field `{key}`: {other}")),
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&raw)
        ));
    }
    Ok(pairs.join("&"))
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthSession;
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Form;

    fn path(&self) -> String {
        format!("{API_PREFIX}/auth/login")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthSession;
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Form;

    fn path(&self) -> String {
        format!("{API_PREFIX}/auth/register")
    }
}

// =========================================================
// 单词表 (Word Lists)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWordListsRequest;

impl ApiRequest for ListWordListsRequest {
    type Response = Vec<WordList>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetWordListRequest {
    pub id: i64,
}

impl ApiRequest for GetWordListRequest {
    type Response = WordList;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWordListRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiRequest for CreateWordListRequest {
    type Response = WordList;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWordListRequest {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiRequest for UpdateWordListRequest {
    type Response = WordList;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteWordListRequest {
    pub id: i64,
}

impl ApiRequest for DeleteWordListRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWordsRequest {
    pub list_id: i64,
}

impl ApiRequest for ListWordsRequest {
    type Response = Vec<Word>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists/{}/words", self.list_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarWordsRequest {
    pub word_id: i64,
}

impl ApiRequest for SimilarWordsRequest {
    type Response = Vec<Word>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/word-lists/words/{}/similar", self.word_id)
    }
}

// =========================================================
// 练习 (Practice)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPracticeWordRequest {
    pub word_list_id: i64,
}

impl ApiRequest for GetPracticeWordRequest {
    /// None 表示该单词表已练完
    type Response = Option<Word>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/practice/get-word")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPracticeRequest {
    pub word_id: i64,
    pub answer: String,
}

impl ApiRequest for SubmitPracticeRequest {
    type Response = PracticeOutcome;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/practice/submit")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeStatsRequest {
    pub list_id: i64,
}

impl ApiRequest for PracticeStatsRequest {
    type Response = PracticeListStats;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/practice/{}/stats", self.list_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistakePatternsRequest;

impl ApiRequest for MistakePatternsRequest {
    type Response = Vec<MistakePattern>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/practice/mistake-patterns")
    }
}

// =========================================================
// 复习 (SRS Review)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextReviewRequest;

impl ApiRequest for NextReviewRequest {
    /// None 表示当前没有到期单词
    type Response = Option<Word>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/srs/review")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    #[serde(skip)]
    pub word_id: i64,
    pub correct: bool,
}

impl ApiRequest for SubmitReviewRequest {
    /// 返回调度后的单词（新等级与下次复习时间）
    type Response = Word;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/srs/review/{}/submit", self.word_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrsStatsRequest;

impl ApiRequest for SrsStatsRequest {
    type Response = SrsStats;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/srs/stats")
    }
}

// =========================================================
// 语音生成 (TTS)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAllAudioRequest;

impl ApiRequest for GenerateAllAudioRequest {
    type Response = TtsSummary;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/tts/generate-all")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateListAudioRequest {
    pub list_id: i64,
}

impl ApiRequest for GenerateListAudioRequest {
    type Response = TtsSummary;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/tts/word-list/{}/generate", self.list_id)
    }
}

// =========================================================
// 拼写规则 (Spelling Rules)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSpellingRulesRequest;

impl ApiRequest for ListSpellingRulesRequest {
    type Response = Vec<SpellingRule>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{API_PREFIX}/spelling-rules")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpellingRuleRequest {
    pub title: String,
    pub rule_text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl ApiRequest for CreateSpellingRuleRequest {
    type Response = SpellingRule;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("{API_PREFIX}/spelling-rules")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpellingRuleRequest {
    #[serde(skip)]
    pub id: i64,
    pub title: String,
    pub rule_text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl ApiRequest for UpdateSpellingRuleRequest {
    type Response = SpellingRule;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{API_PREFIX}/spelling-rules/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSpellingRuleRequest {
    pub id: i64,
}

impl ApiRequest for DeleteSpellingRuleRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{API_PREFIX}/spelling-rules/{}", self.id)
    }
}

#[cfg(test)]
mod tests;
