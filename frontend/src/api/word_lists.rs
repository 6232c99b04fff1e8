//! 单词表端点
//!
//! CRUD、取词、相似词，以及 CSV 导入（multipart，不走类型化协议）。

use super::ApiClient;
use tingxie_shared::protocol::{
    CreateWordListRequest, DeleteWordListRequest, GetWordListRequest, HttpMethod,
    ListWordListsRequest, ListWordsRequest, SimilarWordsRequest, UpdateWordListRequest,
};
use tingxie_shared::{API_PREFIX, UploadSummary, Word, WordList};
use web_sys::{File, FormData};

impl ApiClient {
    /// 获取当前用户的全部单词表
    pub async fn list_word_lists(&self) -> Result<Vec<WordList>, String> {
        self.send(&ListWordListsRequest).await
    }

    /// 获取单个单词表
    pub async fn get_word_list(&self, id: i64) -> Result<WordList, String> {
        self.send(&GetWordListRequest { id }).await
    }

    /// 新建单词表
    pub async fn create_word_list(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<WordList, String> {
        self.send(&CreateWordListRequest { name, description }).await
    }

    /// 更新单词表名称/描述
    pub async fn update_word_list(
        &self,
        id: i64,
        name: String,
        description: Option<String>,
    ) -> Result<WordList, String> {
        self.send(&UpdateWordListRequest {
            id,
            name,
            description,
        })
        .await
    }

    /// 删除单词表
    pub async fn delete_word_list(&self, id: i64) -> Result<(), String> {
        self.send(&DeleteWordListRequest { id }).await
    }

    /// 获取单词表内的全部单词
    pub async fn list_words(&self, list_id: i64) -> Result<Vec<Word>, String> {
        self.send(&ListWordsRequest { list_id }).await
    }

    /// 获取与指定单词拼写相近的单词
    pub async fn similar_words(&self, word_id: i64) -> Result<Vec<Word>, String> {
        self.send(&SimilarWordsRequest { word_id }).await
    }

    /// 上传 CSV 创建单词表
    ///
    /// 列格式 `word,meaning,example`；multipart 边界由浏览器生成，
    /// 因此这里不能手动设置 Content-Type。
    pub async fn upload_csv(&self, name: String, file: File) -> Result<UploadSummary, String> {
        let form = FormData::new().map_err(|_| "无法构建上传表单".to_string())?;
        form.append_with_str("name", &name)
            .map_err(|_| "无法构建上传表单".to_string())?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| "无法构建上传表单".to_string())?;

        let response = self
            .request(HttpMethod::Post, &format!("{API_PREFIX}/word-lists/upload"))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Self::read_response(response).await
    }
}
