//! 认证端点
//!
//! 登录/注册按后端要求提交 `application/x-www-form-urlencoded` 表单。

use super::ApiClient;
use tingxie_shared::AuthSession;
use tingxie_shared::protocol::{LoginRequest, RegisterRequest};

impl ApiClient {
    /// 登录，返回令牌与用户信息
    pub async fn login(&self, email: String, password: String) -> Result<AuthSession, String> {
        self.send(&LoginRequest { email, password }).await
    }

    /// 注册并直接登录
    pub async fn register(&self, email: String, password: String) -> Result<AuthSession, String> {
        self.send(&RegisterRequest { email, password }).await
    }
}
