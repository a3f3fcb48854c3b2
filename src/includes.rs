use std::{fmt, sync::Arc};

use crate::{PathError, PropertyPath, model::Model, path::ModelPath};

/// Relation paths to load together with a root model.
///
/// Every path must hang off the same root as the model it was created for.
/// The root itself and duplicates are dropped; the first occurrence keeps
/// its position.
#[derive(Clone)]
pub struct Includes {
    root: Arc<dyn PropertyPath>,
    paths: Vec<Arc<dyn PropertyPath>>,
}

impl Includes {
    pub fn new<M: Model>(path: &ModelPath<M>) -> Self {
        Includes {
            root: root_of(path),
            paths: Vec::new(),
        }
    }

    pub fn with(mut self, path: Arc<dyn PropertyPath>) -> Result<Self, PathError> {
        let unnamed =
            path.name().is_empty() || path.ancestors().any(|node| node.name().is_empty());
        if unnamed {
            return Err(PathError::EmptyName {
                path: path.to_string(),
            });
        }

        let path_root = path.root();
        if *path_root != *self.root {
            return Err(PathError::ForeignRoot {
                path: path.to_string(),
                found_root: path_root.name().to_string(),
                found: path_root.model_name(),
                expected_root: self.root.name().to_string(),
                expected: self.root.model_name(),
            });
        }

        if path.parent().is_none() || self.paths.iter().any(|existing| **existing == *path) {
            return Ok(self);
        }

        #[cfg(feature = "trace")]
        tracing::debug!(path = %path, model = path.model_name(), "include relation");

        self.paths.push(path);
        Ok(self)
    }

    pub fn root(&self) -> &dyn PropertyPath {
        &*self.root
    }

    pub fn paths(&self) -> &[Arc<dyn PropertyPath>] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// dotted form of every included path
    pub fn selection(&self) -> Vec<String> {
        self.paths.iter().map(|path| path.to_string()).collect()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "model": self.root.model_name(),
            "paths": self.selection(),
        })
    }
}

impl fmt::Debug for Includes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Includes")
            .field("model", &self.root.model_name())
            .field("paths", &self.selection())
            .finish()
    }
}

fn root_of<M: Model>(path: &ModelPath<M>) -> Arc<dyn PropertyPath> {
    let mut root = match path.parent() {
        Some(parent) => parent,
        None => return Arc::new(path.clone()),
    };
    while let Some(parent) = root.parent() {
        root = parent;
    }
    Arc::clone(root)
}
