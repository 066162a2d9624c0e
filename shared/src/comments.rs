//! 留言板
//!
//! 只追加的留言列表，按提交顺序（最早在前）显示。

use crate::KEY_COMMENTS;
use crate::escape::escape_html;
use crate::storage::{KeyValueStore, StorageError, read_json_or_default, write_json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub message: String,
}

/// 单条留言的 HTML，姓名与内容均已转义
pub fn render_comment(comment: &Comment) -> String {
    format!(
        r#"<div class="comment-box"><strong>{}</strong> says:<br>{}</div>"#,
        escape_html(&comment.name),
        escape_html(&comment.message)
    )
}

#[derive(Debug, Clone)]
pub struct CommentBoard<S> {
    store: S,
}

impl<S: KeyValueStore> CommentBoard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn comments(&self) -> Result<Vec<Comment>, StorageError> {
        read_json_or_default(&self.store, KEY_COMMENTS)
    }

    /// 提交一条留言
    ///
    /// 两个字段先去除首尾空白；任一为空则丢弃并返回 `Ok(None)`。
    pub fn submit(&self, name: &str, message: &str) -> Result<Option<Comment>, StorageError> {
        let (name, message) = (name.trim(), message.trim());
        if name.is_empty() || message.is_empty() {
            return Ok(None);
        }

        let comment = Comment {
            name: name.to_string(),
            message: message.to_string(),
        };
        let mut comments = self.comments()?;
        comments.push(comment.clone());
        write_json(&self.store, KEY_COMMENTS, &comments)?;
        Ok(Some(comment))
    }

    /// 从头重建整个列表的 HTML
    pub fn render_html(&self) -> Result<String, StorageError> {
        Ok(self.comments()?.iter().map(render_comment).collect())
    }
}
