//! 请求中止封装模块
//!
//! 封装 `AbortController`：视图卸载时中止仍在途的请求，
//! 避免过期响应写回已销毁的页面状态。

use web_sys::{AbortController, AbortSignal};

/// 中止守卫
///
/// 持有一个 `AbortController`；被 drop 时中止所有绑定到
/// 其信号上的 fetch 请求。配合 `on_cleanup` 使用。
pub struct AbortGuard {
    controller: Option<AbortController>,
}

impl AbortGuard {
    /// 创建新的守卫
    ///
    /// 环境不支持 AbortController 时退化为无操作守卫。
    pub fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    /// 获取可绑定到请求上的信号
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}

impl Default for AbortGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}
