//! 键值存储抽象
//!
//! 浏览器端由 `LocalStorage` 实现，测试中使用内存实现。
//! 所有值均以 JSON 文本形式保存。

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// 存储错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// 存储不可用（如隐私模式禁用了 localStorage）
    Unavailable,
    /// 读取失败
    Read(String),
    /// 写入失败（如配额已满）
    Write(String),
    /// 已存值无法解析
    Decode { key: String, reason: String },
    /// 值无法序列化
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "local storage is unavailable"),
            StorageError::Read(msg) => write!(f, "storage read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "storage write failed: {}", msg),
            StorageError::Decode { key, reason } => {
                write!(f, "stored value for '{}' is corrupt: {}", key, reason)
            }
            StorageError::Encode(msg) => write!(f, "value could not be encoded: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// 同步的字符串键值存储
pub trait KeyValueStore {
    /// 读取原始字符串，键不存在时返回 `Ok(None)`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 键是否存在
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_item(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// 读取 JSON 值，键不存在时返回 `None`
pub fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get_item(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Decode {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// 读取 JSON 值，键不存在时返回 `T::default()`
pub fn read_json_or_default<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    Ok(read_json(store, key)?.unwrap_or_default())
}

/// 序列化并写入 JSON 值
pub fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set_item(key, &raw)
}

// =========================================================
// 测试用内存存储 (Mock)
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// 内存键值存储，行为与 localStorage 一致（字符串进出）
    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<BTreeMap<String, String>>,
        fail_writes: RefCell<bool>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        /// 模拟配额耗尽
        pub fn fail_writes(&self) {
            *self.fail_writes.borrow_mut() = true;
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if *self.fail_writes.borrow() {
                return Err(StorageError::Write("QuotaExceededError".to_string()));
            }
            self.put_raw(key, value);
            Ok(())
        }
    }

    #[test]
    fn json_helpers_round_trip_through_raw_text() {
        let store = MemoryStore::new();
        write_json(&store, "list", &vec!["a", "b"]).unwrap();
        assert_eq!(store.raw("list").as_deref(), Some(r#"["a","b"]"#));

        let list: Vec<String> = read_json_or_default(&store, "list").unwrap();
        assert_eq!(list, vec!["a", "b"]);
    }

    #[test]
    fn missing_key_reads_as_default() {
        let store = MemoryStore::new();
        let list: Vec<String> = read_json_or_default(&store, "nothing").unwrap();
        assert!(list.is_empty());
        assert!(!store.contains("nothing").unwrap());
    }

    #[test]
    fn corrupt_value_is_a_decode_error() {
        let store = MemoryStore::new();
        store.put_raw("list", "{not json");
        let err = read_json::<_, Vec<String>>(&store, "list").unwrap_err();
        assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "list"));
    }

    #[test]
    fn write_failure_propagates() {
        let store = MemoryStore::new();
        store.fail_writes();
        let err = write_json(&store, "k", &1).unwrap_err();
        assert_eq!(err, StorageError::Write("QuotaExceededError".to_string()));
    }
}
