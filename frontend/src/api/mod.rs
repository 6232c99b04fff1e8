//! 类型化 HTTP 客户端
//!
//! 所有请求通过 `ApiClient::send` 发出：方法、路径、编码和响应类型
//! 均来自 `tingxie_shared::protocol::ApiRequest` 的定义。
//! 所有失败统一归一化为一条人类可读的错误文案（`Result<T, String>`）。
//!
//! 唯一全局处理的状态码是 401：视为会话失效，清除本地凭据并
//! 强制跳转登录页，放弃当前视图状态。其余错误都由调用页面自行展示。

mod auth;
mod practice;
mod review;
mod spelling_rules;
mod tts;
mod word_lists;

use crate::auth::{STORAGE_TOKEN_KEY, STORAGE_USER_KEY};
use crate::web::{AbortGuard, LocalStorage};
use crate::web::route::AppRoute;
use gloo_net::http::{Request, RequestBuilder, Response};
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use tingxie_shared::protocol::{ApiRequest, Encoding, HttpMethod, form_urlencode};
use tingxie_shared::{ErrorBody, HEADER_AUTHORIZATION};

/// 会话失效时的统一文案
pub const SESSION_EXPIRED_MSG: &str = "登录已过期，请重新登录";

/// API 客户端
///
/// 持有基址、可选的 Bearer 令牌，以及可选的中止信号
/// （由 `scoped` 绑定到视图生命周期）。
///
/// 中止信号是 JS 句柄；用 `SendWrapper` 包一层让客户端可以放进
/// 响应式状态里（单线程 WASM 环境下不会真的跨线程）。
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    abort: Option<SendWrapper<web_sys::AbortSignal>>,
}

impl ApiClient {
    /// 创建客户端
    ///
    /// 基址来自编译期环境变量 `TINGXIE_API_URL`，缺省为同源。
    pub fn new(token: Option<String>) -> Self {
        let base_url = option_env!("TINGXIE_API_URL")
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            token,
            abort: None,
        }
    }

    /// 派生一个绑定视图生命周期的客户端
    ///
    /// 返回的守卫在 drop 时中止所有经由该克隆发出的在途请求；
    /// 页面应持有守卫直到组件销毁（放入局部 arena 即可）。
    pub fn scoped(&self) -> (Self, AbortGuard) {
        let guard = AbortGuard::new();
        let mut client = self.clone();
        client.abort = guard.signal().map(SendWrapper::new);
        (client, guard)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 构建带认证头与中止信号的请求
    pub(crate) fn request(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if let Some(token) = &self.token {
            builder = builder.header(HEADER_AUTHORIZATION, &format!("Bearer {token}"));
        }
        builder.abort_signal(self.abort.as_deref())
    }

    /// 发送类型化请求
    pub(crate) async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, String> {
        let builder = self.request(R::METHOD, &req.path());

        let request = if R::METHOD.has_body() {
            match R::ENCODING {
                Encoding::Json => builder
                    .header("Content-Type", "application/json")
                    .body(serde_json::to_string(req).map_err(|e| e.to_string())?),
                Encoding::Form => builder
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(form_urlencode(req)?),
            }
            .map_err(|e| e.to_string())?
        } else {
            builder.build().map_err(|e| e.to_string())?
        };

        let response = request.send().await.map_err(|e| e.to_string())?;
        Self::read_response(response).await
    }

    /// 解析响应：401 全局处理，其余错误归一化为文案
    pub(crate) async fn read_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, String> {
        if response.status() == 401 {
            Self::expire_session();
            return Err(SESSION_EXPIRED_MSG.to_string());
        }
        if !response.ok() {
            return Err(normalize_error(response).await);
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        // 空响应体（如 204）按 null 解析，兼容 `()` 与 Option 响应
        let body = if body.trim().is_empty() {
            "null".to_string()
        } else {
            body
        };
        serde_json::from_str(&body).map_err(|e| format!("响应解析失败: {e}"))
    }

    /// 会话失效：清除凭据并强制回到登录页
    fn expire_session() {
        web_sys::console::error_1(&"[Api] 401 received, purging session.".into());
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        LocalStorage::delete(STORAGE_USER_KEY);
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&AppRoute::auth_failure_redirect().to_path());
        }
    }
}

/// 将非 2xx 响应归一化为展示文案
///
/// 优先取服务端的 `detail`/`message` 字段，其次原始响应体，
/// 最后回退到状态码。
async fn normalize_error(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.into_message().unwrap_or(body),
            Err(_) => body,
        },
        _ => format!("HTTP {status}"),
    }
}
