//! 本地统计
//!
//! 三个持久化值：总访问数、各文章浏览数、各文章点赞数。
//! 首次使用时惰性初始化，初始化从不覆盖已有数据。

use crate::storage::{KeyValueStore, StorageError, read_json, read_json_or_default, write_json};
use crate::{KEY_ARTICLE_VIEWS, KEY_LIKES, KEY_TOTAL_VISITS, SiteConfig};
use std::collections::BTreeMap;

/// 文章键 -> 计数
pub type Counters = BTreeMap<String, u64>;

/// 某一时刻的统计快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_visits: u64,
    pub views: Counters,
    pub likes: Counters,
}

impl StatsSnapshot {
    pub fn views_of(&self, key: &str) -> u64 {
        self.views.get(key).copied().unwrap_or(0)
    }

    pub fn likes_of(&self, key: &str) -> u64 {
        self.likes.get(key).copied().unwrap_or(0)
    }
}

/// 统计存储
#[derive(Debug, Clone)]
pub struct MetricsStore<S> {
    store: S,
    article_keys: Vec<String>,
}

impl<S: KeyValueStore> MetricsStore<S> {
    pub fn new(store: S, config: &SiteConfig) -> Self {
        Self {
            store,
            article_keys: config.article_keys.clone(),
        }
    }

    /// 预置的文章键
    pub fn article_keys(&self) -> &[String] {
        &self.article_keys
    }

    /// 仅为缺失的键写入默认值
    pub fn init(&self) -> Result<(), StorageError> {
        if !self.store.contains(KEY_TOTAL_VISITS)? {
            self.store.set_item(KEY_TOTAL_VISITS, "0")?;
        }
        for key in [KEY_ARTICLE_VIEWS, KEY_LIKES] {
            if !self.store.contains(key)? {
                write_json(&self.store, key, &self.seed_counters())?;
            }
        }
        Ok(())
    }

    fn seed_counters(&self) -> Counters {
        self.article_keys.iter().map(|k| (k.clone(), 0)).collect()
    }

    /// 总访问数；无法解析的值按 0 处理
    pub fn total_visits(&self) -> Result<u64, StorageError> {
        Ok(self
            .store
            .get_item(KEY_TOTAL_VISITS)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0))
    }

    /// 访问数加一，返回新值
    pub fn record_visit(&self) -> Result<u64, StorageError> {
        let visits = self.total_visits()?.saturating_add(1);
        self.store.set_item(KEY_TOTAL_VISITS, &visits.to_string())?;
        Ok(visits)
    }

    /// 浏览数加一，返回新值
    pub fn record_view(&self, article: &str) -> Result<u64, StorageError> {
        self.increment(KEY_ARTICLE_VIEWS, article)
    }

    /// 点赞数加一，返回新值
    pub fn record_like(&self, article: &str) -> Result<u64, StorageError> {
        self.increment(KEY_LIKES, article)
    }

    /// 取出（不存在则置 0）后加一，并写回整张表
    fn increment(&self, storage_key: &str, article: &str) -> Result<u64, StorageError> {
        let mut counters: Counters = read_json(&self.store, storage_key)?
            .unwrap_or_else(|| self.seed_counters());
        let count = counters.entry(article.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let value = *count;
        write_json(&self.store, storage_key, &counters)?;
        Ok(value)
    }

    /// 重新读取全部统计值
    pub fn snapshot(&self) -> Result<StatsSnapshot, StorageError> {
        Ok(StatsSnapshot {
            total_visits: self.total_visits()?,
            views: read_json_or_default(&self.store, KEY_ARTICLE_VIEWS)?,
            likes: read_json_or_default(&self.store, KEY_LIKES)?,
        })
    }
}

#[cfg(test)]
mod tests;
