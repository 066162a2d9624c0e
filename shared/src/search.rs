//! 搜索关键字记录
//!
//! 完整记录只追加、不截断；“最近关键字”只取最后若干条并倒序显示。
//! 结果面板是示范用的静态内容，并不执行真正的搜索。

use crate::KEY_SEARCH_KEYWORDS;
use crate::escape::escape_html;
use crate::storage::{KeyValueStore, StorageError, read_json_or_default, write_json};

/// 最近关键字标签，关键字已转义
pub fn render_tags(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| format!(r#"<span class="keyword-tag">{}</span>"#, escape_html(k)))
        .collect()
}

/// 搜索结果面板
pub fn render_results(keyword: &str) -> String {
    format!(
        "<p>You searched for: <strong>{}</strong></p>\n\
         <p>(Related articles or links would appear here; this is a demo.)</p>",
        escape_html(keyword)
    )
}

#[derive(Debug, Clone)]
pub struct SearchLog<S> {
    store: S,
    recent_limit: usize,
}

impl<S: KeyValueStore> SearchLog<S> {
    pub fn new(store: S, recent_limit: usize) -> Self {
        Self {
            store,
            recent_limit,
        }
    }

    /// 完整记录，按提交顺序
    pub fn keywords(&self) -> Result<Vec<String>, StorageError> {
        read_json_or_default(&self.store, KEY_SEARCH_KEYWORDS)
    }

    /// 记录一个关键字；去除空白后为空则返回 `Ok(None)`
    pub fn submit(&self, keyword: &str) -> Result<Option<String>, StorageError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(None);
        }
        let mut keywords = self.keywords()?;
        keywords.push(keyword.to_string());
        write_json(&self.store, KEY_SEARCH_KEYWORDS, &keywords)?;
        Ok(Some(keyword.to_string()))
    }

    /// 最近的关键字，最新的在前
    pub fn recent(&self) -> Result<Vec<String>, StorageError> {
        let keywords = self.keywords()?;
        let start = keywords.len().saturating_sub(self.recent_limit);
        Ok(keywords[start..].iter().rev().cloned().collect())
    }

    pub fn render_recent_html(&self) -> Result<String, StorageError> {
        Ok(render_tags(&self.recent()?))
    }
}
