//! 顶点定义

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// 顶点 ID（图内唯一的字符串标签）
///
/// 排序按字符串字典序，无向图保存时用它决定每条边写哪一个方向。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_vertex_id_ordering() {
        let a = VertexId::from("A");
        let b = VertexId::new("B".to_string());
        assert!(a < b);
        assert_eq!(a.as_str(), "A");
        assert_eq!(b.to_string(), "B");
    }

    #[test]
    fn test_vertex_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(VertexId::from("X"), 1);
        assert_eq!(map.get("X"), Some(&1));
    }
}
