use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a group. Input files may spell ids as strings or numbers;
/// both normalize to the same string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Integer(i64),
    Number(f64),
    String(String),
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        Ok(match raw {
            NumberOrString::Integer(val) => GroupId(val.to_string()),
            NumberOrString::Number(val) => GroupId(format!("{}", val)),
            NumberOrString::String(val) => GroupId(val),
        })
    }
}

/// A group draws as one circle. Everything besides `id` is carried through
/// untouched for the renderer (`name`, `color`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl Group {
    pub fn new(id: impl Into<GroupId>) -> Self {
        Self {
            id: id.into(),
            attrs: serde_json::Map::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(|v| v.as_str())
    }

    /// Display title: the `name` attribute when present, otherwise the id.
    pub fn title(&self) -> &str {
        self.attr_str("name").unwrap_or(self.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub group_ids: Vec<GroupId>,
}

impl Member {
    pub fn new<I, G>(name: impl Into<String>, group_ids: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupId>,
    {
        Self {
            name: name.into(),
            group_ids: group_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw diagram input, consumed once when the model is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VennData {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl VennData {
    pub fn new() -> Self {
        Self::default()
    }
}
