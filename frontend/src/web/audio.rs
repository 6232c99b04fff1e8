//! 音频播放封装模块
//!
//! 每个页面/对话框持有一个 `HtmlAudioElement`：
//! 重复播放请求直接替换当前播放（last-write-wins），
//! 元素在 drop 时暂停并清空 `src`。

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// 单元素音频播放器
pub struct AudioPlayer {
    element: Option<HtmlAudioElement>,
}

impl AudioPlayer {
    /// 创建播放器
    ///
    /// 元素创建失败（非浏览器环境）时退化为无操作播放器。
    pub fn new() -> Self {
        Self {
            element: HtmlAudioElement::new().ok(),
        }
    }

    /// 播放指定 URL
    ///
    /// 正在播放时直接切换到新地址。播放失败通过 `on_error`
    /// 上报为用户可见的错误文案，不做重试。
    pub fn play(&self, url: &str, on_error: impl Fn(String) + 'static) {
        let Some(element) = &self.element else {
            on_error("当前环境不支持音频播放".to_string());
            return;
        };

        // last-write-wins：先复位再换源
        let _ = element.pause();
        element.set_src(url);
        element.set_current_time(0.0);

        match element.play() {
            Ok(promise) => {
                leptos::task::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        let msg = e
                            .as_string()
                            .unwrap_or_else(|| "音频播放失败".to_string());
                        on_error(msg);
                    }
                });
            }
            Err(e) => {
                let msg = e.as_string().unwrap_or_else(|| "音频播放失败".to_string());
                on_error(msg);
            }
        }
    }

    /// 停止播放并清空音源
    pub fn stop(&self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
            element.set_src("");
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
