//! 会话模块
//!
//! 管理登录会话的完整生命周期：从 LocalStorage 恢复、登录/注册、登出。
//! 与路由系统解耦：路由服务通过注入的认证信号来检查认证状态。
//!
//! 持久化不变量：`tingxie_token` 与 `tingxie_user` 要么同时存在、
//! 要么同时缺失；任一半缺失或用户记录解析失败时两个键一并清除。

use crate::api::ApiClient;
use crate::web::LocalStorage;
use leptos::prelude::*;
use tingxie_shared::{AuthSession, User};

pub(crate) const STORAGE_TOKEN_KEY: &str = "tingxie_token";
pub(crate) const STORAGE_USER_KEY: &str = "tingxie_user";

/// 会话状态
#[derive(Clone)]
pub struct AuthState {
    /// API 客户端实例（携带令牌，仅在认证成功后存在）
    pub api: Option<ApiClient>,
    /// 当前用户
    pub user: Option<User>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在从存储恢复
    pub is_loading: bool,
    /// 最近一次登录/注册失败的文案
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            api: None,
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 解析持久化的会话对
///
/// 纯函数：任一半缺失或用户 JSON 非法都视为无会话。
pub(crate) fn decode_session(
    token: Option<String>,
    user_json: Option<String>,
) -> Option<(String, User)> {
    let token = token?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some((token, user))
}

/// 清除持久化凭据（幂等）
fn clear_session_storage() {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    LocalStorage::delete(STORAGE_USER_KEY);
}

/// 持久化凭据：两个键一起写入，维持不变量
fn persist_session(session: &AuthSession) {
    LocalStorage::set(STORAGE_TOKEN_KEY, &session.access_token);
    LocalStorage::set_json(STORAGE_USER_KEY, &session.user);
}

/// 初始化会话状态
///
/// 从 LocalStorage 恢复令牌与用户；解析失败时清除两个键并保持未认证。
pub fn init_auth(ctx: &AuthContext) {
    let token = LocalStorage::get(STORAGE_TOKEN_KEY);
    let user_json = LocalStorage::get(STORAGE_USER_KEY);
    let had_any = token.is_some() || user_json.is_some();

    match decode_session(token, user_json) {
        Some((token, user)) => {
            ctx.set_state.update(|state| {
                state.api = Some(ApiClient::new(Some(token)));
                state.user = Some(user);
                state.is_authenticated = true;
                state.is_loading = false;
            });
        }
        None => {
            if had_any {
                // 半套或损坏的凭据：一并清除
                clear_session_storage();
            }
            ctx.set_state.update(|state| {
                state.is_loading = false;
            });
        }
    }
}

/// 应用认证成功的会话
fn apply_session(ctx: &AuthContext, session: AuthSession) {
    persist_session(&session);
    ctx.set_state.update(|state| {
        state.api = Some(ApiClient::new(Some(session.access_token.clone())));
        state.user = Some(session.user.clone());
        state.is_authenticated = true;
        state.is_loading = false;
        state.error = None;
    });
}

/// 登录
///
/// 成功时持久化凭据并进入已认证状态；失败时仅设置错误文案、
/// 状态保持未认证。不向调用方抛错，返回是否成功。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> bool {
    let api = ApiClient::new(None);
    match api.login(email, password).await {
        Ok(session) => {
            apply_session(ctx, session);
            true
        }
        Err(msg) => {
            ctx.set_state.update(|state| state.error = Some(msg));
            false
        }
    }
}

/// 注册（成功即登录）
pub async fn register(ctx: &AuthContext, email: String, password: String) -> bool {
    let api = ApiClient::new(None);
    match api.register(email, password).await {
        Ok(session) => {
            apply_session(ctx, session);
            true
        }
        Err(msg) => {
            ctx.set_state.update(|state| state.error = Some(msg));
            false
        }
    }
}

/// 登出并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    clear_session_storage();
    ctx.set_state.update(|state| {
        state.api = None;
        state.user = None;
        state.is_authenticated = false;
        state.error = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> String {
        r#"{"id":1,"email":"u@test.cn","is_active":true}"#.to_string()
    }

    #[test]
    fn decode_requires_both_halves() {
        assert!(decode_session(None, None).is_none());
        assert!(decode_session(Some("tok".to_string()), None).is_none());
        assert!(decode_session(None, Some(user_json())).is_none());
    }

    #[test]
    fn decode_rejects_corrupt_user_record() {
        assert!(decode_session(Some("tok".to_string()), Some("{not json".to_string())).is_none());
    }

    #[test]
    fn decode_accepts_valid_pair() {
        let (token, user) =
            decode_session(Some("tok".to_string()), Some(user_json())).expect("valid session");
        assert_eq!(token, "tok");
        assert_eq!(user.email, "u@test.cn");
        assert!(user.is_active);
    }
}
