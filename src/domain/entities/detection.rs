//! Detection entities - where a project was found and what stack it uses

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::StackKind;

/// A project directory paired with its detected stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    path: PathBuf,
    stack: StackKind,
}

impl Detection {
    pub fn new(path: impl Into<PathBuf>, stack: StackKind) -> Self {
        Self {
            path: path.into(),
            stack,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stack(&self) -> StackKind {
        self.stack
    }

    /// Path relative to `root`, or `"."` when the detection is the root itself.
    pub fn relative_to(&self, root: &Path) -> String {
        match self.path.strip_prefix(root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => self.path.display().to_string(),
        }
    }
}

/// Ordered detections, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DetectionSet {
    items: Vec<Detection>,
}

impl DetectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detection: Detection) {
        self.items.push(detection);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detection> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&Detection> {
        self.items.first()
    }

    /// The detection located exactly at `root`, if any
    pub fn at(&self, root: &Path) -> Option<&Detection> {
        self.items.iter().find(|d| d.path() == root)
    }

    /// More than one project after deduplication.
    ///
    /// A single detection is never a monorepo, even when it is not at the
    /// scan root.
    pub fn is_monorepo(&self) -> bool {
        is_monorepo(&self.items)
    }

    pub fn into_vec(self) -> Vec<Detection> {
        self.items
    }
}

impl From<Vec<Detection>> for DetectionSet {
    fn from(items: Vec<Detection>) -> Self {
        Self { items }
    }
}

impl FromIterator<Detection> for DetectionSet {
    fn from_iter<T: IntoIterator<Item = Detection>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DetectionSet {
    type Item = Detection;
    type IntoIter = std::vec::IntoIter<Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DetectionSet {
    type Item = &'a Detection;
    type IntoIter = std::slice::Iter<'a, Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// True whenever there is more than one detection, regardless of path.
pub fn is_monorepo(detections: &[Detection]) -> bool {
    detections.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_root_is_dot() {
        let d = Detection::new("/repo", StackKind::Go);
        assert_eq!(d.relative_to(Path::new("/repo")), ".");
    }

    #[test]
    fn relative_to_nested_uses_forward_slashes() {
        let d = Detection::new(Path::new("/repo").join("services").join("api"), StackKind::Go);
        assert_eq!(d.relative_to(Path::new("/repo")), "services/api");
    }

    #[test]
    fn is_monorepo_by_count() {
        assert!(!is_monorepo(&[]));
        assert!(!is_monorepo(&[Detection::new("/repo/sub", StackKind::Node)]));
        assert!(is_monorepo(&[
            Detection::new("/repo/a", StackKind::Node),
            Detection::new("/repo/b", StackKind::Node),
        ]));
    }

    #[test]
    fn at_finds_root_detection() {
        let set: DetectionSet = vec![
            Detection::new("/repo", StackKind::Go),
            Detection::new("/repo/web", StackKind::Node),
        ]
        .into();
        assert_eq!(set.at(Path::new("/repo")).map(|d| d.stack()), Some(StackKind::Go));
        assert!(set.at(Path::new("/other")).is_none());
    }

    #[test]
    fn serializes_as_list() {
        let set: DetectionSet = vec![Detection::new("/repo", StackKind::Python)].into();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["stack"], "python");
    }
}
