//! 播放器状态
//!
//! 持有最近一次加载的清单，并把“加载结果”和“用户选择”
//! 转换为页面需要写入的三块内容：下拉选项、显示区、错误区。
//! 页面组件拥有此状态，渲染逻辑本身不触碰 DOM。

use crate::manifest::{ManifestError, MediaItem, failure_diagnostic};
use crate::media::{
    self, EMPTY_MANIFEST_HTML, EMPTY_MANIFEST_NOTICE, LOAD_FAILED_HTML, RenderError,
    SELECT_PROMPT_HTML,
};

/// 下拉框占位选项文本
pub const SELECT_PLACEHOLDER_LABEL: &str = "Please choose a media item";

/// 下拉框中的一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// 一次渲染的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    /// 显示区 HTML
    pub display_html: String,
    /// 错误区文本，空串表示无错误
    pub error_text: String,
    /// 本次渲染失败的原因（供日志使用）
    pub failure: Option<RenderError>,
}

impl PlayerView {
    fn display(html: &str) -> Self {
        Self {
            display_html: html.to_string(),
            error_text: String::new(),
            failure: None,
        }
    }
}

/// 一次清单加载的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadView {
    /// 包含占位项在内的全部选项
    pub options: Vec<SelectOption>,
    /// 下拉框当前值
    pub selected: String,
    pub player: PlayerView,
}

/// 页面级播放器状态
#[derive(Debug, Clone, Default)]
pub struct MediaPlayer {
    items: Option<Vec<MediaItem>>,
}

impl MediaPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已加载的条目；尚未成功加载时为空
    pub fn items(&self) -> &[MediaItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// 应用清单加载结果
    ///
    /// 成功且非空时默认选中第一项并立即渲染。
    pub fn load(
        &mut self,
        result: Result<Vec<MediaItem>, ManifestError>,
        manifest_path: &str,
        file_name: &str,
    ) -> LoadView {
        let items = match result {
            Ok(items) => items,
            Err(err) => {
                return LoadView {
                    options: vec![SelectOption::placeholder()],
                    selected: String::new(),
                    player: PlayerView {
                        display_html: LOAD_FAILED_HTML.to_string(),
                        error_text: failure_diagnostic(&err, manifest_path, file_name),
                        failure: None,
                    },
                };
            }
        };

        let mut options = Vec::with_capacity(items.len() + 1);
        options.push(SelectOption::placeholder());
        options.extend(items.iter().enumerate().map(|(index, item)| SelectOption {
            value: index.to_string(),
            label: item.option_label(index),
        }));

        let is_empty = items.is_empty();
        self.items = Some(items);

        if is_empty {
            return LoadView {
                options,
                selected: String::new(),
                player: PlayerView {
                    display_html: EMPTY_MANIFEST_HTML.to_string(),
                    error_text: EMPTY_MANIFEST_NOTICE.to_string(),
                    failure: None,
                },
            };
        }

        let selected = "0".to_string();
        let player = self.select(&selected);
        LoadView {
            options,
            selected,
            player,
        }
    }

    /// 按下拉框的原始值渲染
    ///
    /// 无法解析、尚未加载或越界时显示中性提示，不报错。
    pub fn select(&self, raw: &str) -> PlayerView {
        let Some(item) = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.items().get(index))
        else {
            return PlayerView::display(SELECT_PROMPT_HTML);
        };

        match media::render_item(item) {
            Ok(html) => PlayerView::display(&html),
            Err(err) => PlayerView {
                display_html: media::failure_html(&err, &item.url),
                error_text: format!("Playback failed: {}", err),
                failure: Some(err),
            },
        }
    }
}
