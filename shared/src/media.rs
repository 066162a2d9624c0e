//! 媒体渲染
//!
//! 按条目类型生成嵌入标记。标题与 URL 原样写入：
//! 它们来自站点自己的清单，而非用户输入。

use crate::MediaItem;
use std::fmt;

/// 支持的媒体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    YouTube,
    Mp4,
    Audio,
}

impl MediaKind {
    /// 从清单中的 `type` 字段判定类型
    pub fn classify(kind: &str) -> Result<Self, RenderError> {
        match kind {
            "youtube" => Ok(Self::YouTube),
            "mp4" => Ok(Self::Mp4),
            "audio" => Ok(Self::Audio),
            other => Err(RenderError::UnsupportedMediaType(other.to_string())),
        }
    }
}

/// 单个条目的渲染错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    UnsupportedMediaType(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnsupportedMediaType(kind) => {
                write!(f, "Unsupported media type: {}", kind)
            }
        }
    }
}

impl std::error::Error for RenderError {}

// =========================================================
// 占位内容
// =========================================================

pub const SELECT_PROMPT_HTML: &str =
    r#"<p style="color: #666; text-align: center;">Please choose a media item</p>"#;

pub const EMPTY_MANIFEST_HTML: &str =
    r#"<p style="color: #666; text-align: center;">No media content is available yet</p>"#;

pub const LOAD_FAILED_HTML: &str = r#"<div style="text-align: center; padding: 40px; color: #666;">
  <div style="font-size: 3em; margin-bottom: 20px;">🎬</div>
  <h3>Unable to load the media list</h3>
  <p>Please check your network connection or the media manifest</p>
</div>"#;

pub const EMPTY_MANIFEST_NOTICE: &str =
    "⚠️ No media content is available yet (the manifest is empty)";

// =========================================================
// 渲染
// =========================================================

/// 渲染一个条目，未知类型返回 `UnsupportedMediaType`
pub fn render_item(item: &MediaItem) -> Result<String, RenderError> {
    let kind = MediaKind::classify(&item.kind)?;
    Ok(match kind {
        MediaKind::YouTube => youtube_html(item.title(), &item.url),
        MediaKind::Mp4 => video_html(item.title(), &item.url),
        MediaKind::Audio => audio_html(item.title(), &item.url),
    })
}

fn youtube_html(title: &str, url: &str) -> String {
    format!(
        r#"<div style="width: 100%; max-width: 800px; margin: 0 auto;">
  <iframe width="100%" height="450" src="{url}?rel=0&modestbranding=1" frameborder="0"
    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
    allowfullscreen style="border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);"></iframe>
  {caption}
</div>"#,
        caption = caption_html(title, "🎬 YouTube video"),
    )
}

fn video_html(title: &str, url: &str) -> String {
    format!(
        r#"<div style="width: 100%; max-width: 800px; margin: 0 auto; text-align: center;">
  <video controls width="100%" height="450" style="border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);">
    <source src="{url}" type="video/mp4">
    Your browser does not support video playback. Try Chrome, Firefox or Edge.
  </video>
  {caption}
</div>"#,
        caption = caption_html(title, "🎥 Local video file"),
    )
}

fn audio_html(title: &str, url: &str) -> String {
    format!(
        r#"<div style="width: 100%; max-width: 600px; margin: 0 auto; text-align: center;">
  <div style="background: #f8f9fa; padding: 30px; border-radius: 8px; margin-bottom: 20px;">
    <div style="font-size: 3em; color: #3498db; margin-bottom: 20px;">🎵</div>
    <strong style="font-size: 1.2em;">{title}</strong>
  </div>
  <audio controls style="width: 100%;" preload="metadata">
    <source src="{url}" type="audio/mpeg">
    Your browser does not support audio playback.
  </audio>
  <div style="margin-top: 15px; color: #666; font-size: 0.9em;">🔊 Audio file</div>
</div>"#
    )
}

fn caption_html(title: &str, label: &str) -> String {
    format!(
        r#"<div style="margin-top: 15px; padding: 10px; background: #f8f9fa; border-radius: 5px;">
    <strong>{title}</strong>
    <div style="margin-top: 5px; color: #666; font-size: 0.9em;">{label}</div>
  </div>"#
    )
}

/// 单个条目播放失败时的显示块
pub fn failure_html(err: &RenderError, url: &str) -> String {
    format!(
        r#"<div style="text-align: center; padding: 40px; background: #ffebee; border-radius: 8px;">
  <div style="font-size: 3em; color: #f44336; margin-bottom: 20px;">❌</div>
  <h3>Unable to play this media item</h3>
  <p style="color: #666;">{err}</p>
  <p style="margin-top: 10px; font-size: 0.9em;">File: {url}</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_embed_appends_branding_params() {
        let item = MediaItem::new("Launch talk", "youtube", "https://x/y");
        let html = render_item(&item).unwrap();
        assert!(html.contains(r#"src="https://x/y?rel=0&modestbranding=1""#));
        assert!(html.contains(r#"height="450""#));
        assert!(html.contains("max-width: 800px"));
        assert!(html.contains("<strong>Launch talk</strong>"));
    }

    #[test]
    fn mp4_uses_single_video_source() {
        let html = render_item(&MediaItem::new("Clip", "mp4", "media/clip.mp4")).unwrap();
        assert!(html.contains("<video controls"));
        assert_eq!(html.matches("<source").count(), 1);
        assert!(html.contains(r#"<source src="media/clip.mp4" type="video/mp4">"#));
        assert!(html.contains("does not support video playback"));
    }

    #[test]
    fn audio_uses_audio_control_with_icon() {
        let html = render_item(&MediaItem::new("Song", "audio", "media/song.mp3")).unwrap();
        assert!(html.contains(r#"<audio controls"#));
        assert!(html.contains(r#"<source src="media/song.mp3" type="audio/mpeg">"#));
        assert!(html.contains("🎵"));
        assert!(html.contains("Song"));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = render_item(&MediaItem::new("Doc", "pdf", "doc.pdf")).unwrap_err();
        assert_eq!(err, RenderError::UnsupportedMediaType("pdf".to_string()));
        assert_eq!(err.to_string(), "Unsupported media type: pdf");
    }

    #[test]
    fn kind_matching_is_case_sensitive() {
        assert!(MediaKind::classify("YouTube").is_err());
        assert_eq!(MediaKind::classify("mp4"), Ok(MediaKind::Mp4));
    }

    #[test]
    fn failure_block_shows_message_and_url() {
        let err = RenderError::UnsupportedMediaType("flv".to_string());
        let html = failure_html(&err, "old/clip.flv");
        assert!(html.contains("Unsupported media type: flv"));
        assert!(html.contains("File: old/clip.flv"));
    }
}
