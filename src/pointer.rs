//! A representation of a JSON Pointer with associated operations, as per RFC 6901
//!
//! The comparators use pointers to say *where* in a document a difference was found.
use std::fmt::Display;

/// Each pointer is a series of segments delineated by a separator char
const PATH_SEPARATOR: &str = "/";
/// As per the RFC, we need to encode any tilde characters as ~0
const ENCODED_TILDE: &str = "~0";
/// As per the RFC, we need to encode any slash characters as ~1
const ENCODED_SLASH: &str = "~1";

/// Each pointer is made of either named or indexed components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPointerComponent {
    /// A named element within a pointer
    Name(String),
    /// An indexed element within a pointer
    Index(usize),
}

impl Display for JsonPointerComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(s) => write!(
                f,
                "{}",
                s.replace('~', ENCODED_TILDE).replace('/', ENCODED_SLASH)
            ),
            Self::Index(i) => write!(f, "{}", i),
        }
    }
}

/// A structure representing a complete pointer, comprising multiple [JsonPointerComponent]s
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    /// The components that go together to make up the pointer
    components: Vec<JsonPointerComponent>,
}

impl JsonPointer {
    /// Checks whether the pointer is the root pointer
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Push a new [JsonPointerComponent::Name] onto the end of the pointer
    pub fn push_name(&mut self, name: impl Into<String>) {
        self.components.push(JsonPointerComponent::Name(name.into()))
    }

    /// Push a new [JsonPointerComponent::Index] onto the end of the pointer
    pub fn push_index(&mut self, index: usize) {
        self.components.push(JsonPointerComponent::Index(index))
    }

    /// A copy of this pointer, extended by a name
    pub fn child_name(&self, name: &str) -> JsonPointer {
        let mut child = self.clone();
        child.push_name(name);
        child
    }

    /// A copy of this pointer, extended by an index
    pub fn child_index(&self, index: usize) -> JsonPointer {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    /// Serialise the pointer into a string representation that's compliant with RFC 6901
    pub fn as_string(&self) -> String {
        self.components
            .iter()
            .map(|c| format!("{}{}", PATH_SEPARATOR, c))
            .collect()
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
