//! Field paths
//!
//! Report keys are built from ordered segments while the engine recurses and
//! only flattened to the dotted wire form (`articles.0.title`) at the report
//! boundary. Keeping the segments apart means a field literally named `a.b`
//! never collides with field `b` nested under `a` while the report is built.

use smallvec::SmallVec;
use std::fmt;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step of a [`FieldPath`]: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// A field name or object key.
    Key(String),
    /// A position inside an array.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&String> for PathSegment {
    fn from(key: &String) -> Self {
        PathSegment::Key(key.clone())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// An ordered sequence of segments addressing a value inside the input.
///
/// The empty path is the root. Most paths are shallow, so up to four segments
/// are stored inline.
///
/// # Examples
///
/// ```
/// use vigil_validator::foundation::FieldPath;
///
/// let path = FieldPath::new("articles").child(0_usize).child("title");
/// assert_eq!(path.to_string(), "articles.0.title");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl FieldPath {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A single-segment path.
    pub fn new(segment: impl Into<PathSegment>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path with `segment` appended.
    #[must_use = "child returns a new path"]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.clone();
        path.segments.push(segment.into());
        path
    }

    /// Returns this path with `segment` inserted in front.
    #[must_use = "prefixed returns a new path"]
    pub fn prefixed(mut self, segment: impl Into<PathSegment>) -> Self {
        self.segments.insert(0, segment.into());
        self
    }

    /// Concatenates `self` and `other`.
    #[must_use = "join returns a new path"]
    pub fn join(&self, other: &FieldPath) -> Self {
        let mut path = self.clone();
        path.segments.extend(other.segments.iter().cloned());
        path
    }

    /// Renders the dotted wire form.
    #[must_use]
    pub fn to_dotted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<PathSegment> for FieldPath {
    fn from(segment: PathSegment) -> Self {
        Self::new(segment)
    }
}

impl From<&str> for FieldPath {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl FromIterator<PathSegment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
