use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Dictionary contents in input order.
pub type Map = IndexMap<String, Value>;

/// A node of the parsed tree. Leaves are always strings: `scutil` prints
/// numbers and booleans as bare text and they are kept that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Dictionary(Map),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Map> {
        match self {
            Value::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Looks up `key` when this value is a dictionary.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dictionary().and_then(|map| map.get(key))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Dictionary(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => serde_json::Value::String(text),
            Value::Dictionary(map) => serde_json::Value::Object(map_to_json(map)),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
        }
    }
}

fn map_to_json(map: Map) -> serde_json::Map<String, serde_json::Value> {
    map.into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(text) => serializer.serialize_str(text),
            Value::Dictionary(map) => serialize_map(map, serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

fn serialize_map<S: Serializer>(map: &Map, serializer: S) -> Result<S::Ok, S::Error> {
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        out.serialize_entry(key, value)?;
    }
    out.end()
}

/// A whole conversion result: the top key from the header line and the
/// dictionary parsed from the rest of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    key: String,
    root: Map,
}

impl Document {
    pub fn new(key: impl Into<String>, root: Map) -> Self {
        Self {
            key: key.into(),
            root,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn root(&self) -> &Map {
        &self.root
    }

    pub fn into_parts(self) -> (String, Map) {
        (self.key, self.root)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        self.clone().into()
    }
}

impl From<Document> for serde_json::Value {
    fn from(document: Document) -> Self {
        let mut top = serde_json::Map::with_capacity(1);
        top.insert(document.key, serde_json::Value::Object(map_to_json(document.root)));
        serde_json::Value::Object(top)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(1))?;
        out.serialize_entry(&self.key, &RootRef(&self.root))?;
        out.end()
    }
}

struct RootRef<'a>(&'a Map);

impl Serialize for RootRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_map(self.0, serializer)
    }
}
