//! # FHI-aims 计算器配置模型
//!
//! 以插入顺序保存 `关键字 -> 值` 的映射，对应 control.in 中的一行一个关键字。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 构建
//! - 被 `writers/control.rs` 渲染

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// 单个关键字的取值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    /// k 点网格 (kx, ky, kz)
    Grid([u32; 3]),
    /// 多个单词，如 `atomic_zora scalar`
    Words(Vec<String>),
    /// socket 端点 (host, port)
    Endpoint(String, u16),
    /// 关键字存在但没有值
    Unset,
}

impl OptionValue {
    pub fn words<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionValue::Words(items.into_iter().map(Into::into).collect())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, OptionValue::Unset)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}

impl From<Option<[u32; 3]>> for OptionValue {
    fn from(v: Option<[u32; 3]>) -> Self {
        match v {
            Some(grid) => OptionValue::Grid(grid),
            None => OptionValue::Unset,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => write!(f, ".true."),
            OptionValue::Bool(false) => write!(f, ".false."),
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::Grid([a, b, c]) => write!(f, "{} {} {}", a, b, c),
            OptionValue::Words(words) => write!(f, "{}", words.join(" ")),
            OptionValue::Endpoint(host, port) => write!(f, "{} {}", host, port),
            OptionValue::Unset => write!(f, "<unset>"),
        }
    }
}

/// FHI-aims 计算器配置
///
/// `set` 覆盖已有关键字时保留其原始位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AimsCalculator {
    parameters: Vec<(String, OptionValue)>,
}

impl AimsCalculator {
    pub fn new() -> Self {
        AimsCalculator::default()
    }

    /// 设置关键字，返回 `&mut Self` 以便链式调用
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.parameters.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.parameters.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

// 序列化为 JSON 对象（保持插入顺序），而不是键值对数组
impl Serialize for AimsCalculator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.parameters.len()))?;
        for (key, value) in &self.parameters {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
