//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 仪表盘 (需要认证)
    Dashboard,
    /// 单词表列表 (需要认证)
    WordLists,
    /// 单词表详情 (需要认证)
    WordListDetail(i64),
    /// 听写练习，携带单词表 id (需要认证)
    Practice(i64),
    /// 间隔复习 (需要认证)
    Review,
    /// 错误模式分析 (需要认证)
    MistakePatterns,
    /// 拼写规则 (需要认证)
    SpellingRules,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] | ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["dashboard"] => Self::Dashboard,
            ["word-lists"] => Self::WordLists,
            ["word-lists", id] => match id.parse::<i64>() {
                Ok(id) => Self::WordListDetail(id),
                Err(_) => Self::NotFound,
            },
            ["practice", id] => match id.parse::<i64>() {
                Ok(id) => Self::Practice(id),
                Err(_) => Self::NotFound,
            },
            ["review"] => Self::Review,
            ["mistakes"] => Self::MistakePatterns,
            ["rules"] => Self::SpellingRules,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::WordLists => "/word-lists".to_string(),
            Self::WordListDetail(id) => format!("/word-lists/{id}"),
            Self::Practice(id) => format!("/practice/{id}"),
            Self::Review => "/review".to_string(),
            Self::MistakePatterns => "/mistakes".to_string(),
            Self::SpellingRules => "/rules".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（如登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/word-lists"), AppRoute::WordLists);
        assert_eq!(AppRoute::from_path("/review"), AppRoute::Review);
        assert_eq!(AppRoute::from_path("/mistakes"), AppRoute::MistakePatterns);
        assert_eq!(AppRoute::from_path("/rules"), AppRoute::SpellingRules);
    }

    #[test]
    fn parses_id_segments() {
        assert_eq!(
            AppRoute::from_path("/word-lists/42"),
            AppRoute::WordListDetail(42)
        );
        assert_eq!(AppRoute::from_path("/practice/7"), AppRoute::Practice(7));
        // 非数字 id 归入 404
        assert_eq!(AppRoute::from_path("/word-lists/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/practice/"), AppRoute::NotFound);
    }

    #[test]
    fn path_round_trip() {
        let routes = [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::WordLists,
            AppRoute::WordListDetail(3),
            AppRoute::Practice(9),
            AppRoute::Review,
            AppRoute::MistakePatterns,
            AppRoute::SpellingRules,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn guards_cover_all_protected_routes() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::WordListDetail(1).requires_auth());
        assert!(AppRoute::Practice(1).requires_auth());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    }
}
