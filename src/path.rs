use std::{any::TypeId, fmt, marker::PhantomData, sync::Arc};

use crate::{
    PathError, PropertyPath, PropertyPathMetadata, ROOT_PATH_NAME, includes::Includes,
    model::Model, traversal::Ancestors,
};

/// Property path node bound to the model `M`.
///
/// Each model gets one of these through `model_path!`, e.g.
/// `TodoPath = ModelPath<Todo>`. The node is immutable: its name, flag,
/// parent and model are fixed when it is built.
pub struct ModelPath<M> {
    metadata: PropertyPathMetadata,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> ModelPath<M> {
    pub fn new(
        name: impl Into<String>,
        is_collection: bool,
        parent: Option<Arc<dyn PropertyPath>>,
    ) -> Self {
        Self {
            metadata: PropertyPathMetadata::new(name, is_collection, parent),
            _model: PhantomData,
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_PATH_NAME, false, None)
    }

    /// relation of `parent` that leads to `M`
    pub fn child(
        parent: Arc<dyn PropertyPath>,
        name: impl Into<String>,
        is_collection: bool,
    ) -> Self {
        Self::new(name, is_collection, Some(parent))
    }

    /// relation of `parent` named after `M`, e.g. `blog_post`
    pub fn related(parent: Arc<dyn PropertyPath>, is_collection: bool) -> Self {
        Self::child(parent, M::model_name_lower_case(), is_collection)
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn is_collection(&self) -> bool {
        self.metadata.is_collection
    }

    pub fn parent(&self) -> Option<&Arc<dyn PropertyPath>> {
        self.metadata.parent.as_ref()
    }

    pub fn metadata(&self) -> &PropertyPathMetadata {
        &self.metadata
    }

    pub fn model_name(&self) -> &'static str {
        M::model_name()
    }

    pub fn model_type_id(&self) -> TypeId {
        TypeId::of::<M>()
    }

    pub fn is_root(&self) -> bool {
        self.metadata.parent.is_none()
    }

    pub fn as_dyn(&self) -> &dyn PropertyPath {
        self
    }

    pub fn ancestors(&self) -> Ancestors<'_> {
        self.as_dyn().ancestors()
    }

    pub fn root_node(&self) -> &dyn PropertyPath {
        self.as_dyn().root()
    }

    pub fn depth(&self) -> usize {
        self.as_dyn().depth()
    }

    pub fn segments(&self) -> Vec<&str> {
        self.as_dyn().segments()
    }

    /// reference to a scalar field of `M` reached through this path
    pub fn field(&self, field: &str) -> Result<FieldPath, PathError> {
        if !M::has_field(field) {
            return Err(PathError::UnknownField {
                model: M::model_name(),
                field: field.to_string(),
            });
        }

        Ok(FieldPath {
            model: M::model_name(),
            path: self.segments().into_iter().map(str::to_string).collect(),
            field: field.to_string(),
        })
    }

    /// relations to load alongside `M`; every path has to start at this
    /// node's root
    pub fn includes(
        &self,
        paths: impl IntoIterator<Item = Arc<dyn PropertyPath>>,
    ) -> Result<Includes, PathError> {
        paths
            .into_iter()
            .try_fold(Includes::new(self), |includes, path| includes.with(path))
    }
}

impl<M: Model> PropertyPath for ModelPath<M> {
    #[inline]
    fn metadata(&self) -> &PropertyPathMetadata {
        &self.metadata
    }

    #[inline]
    fn model_name(&self) -> &'static str {
        M::model_name()
    }

    #[inline]
    fn model_type_id(&self) -> TypeId {
        TypeId::of::<M>()
    }
}

impl<M> Clone for ModelPath<M> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> PartialEq for ModelPath<M> {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
    }
}

impl<M> Eq for ModelPath<M> {}

impl<M: Model> fmt::Debug for ModelPath<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelPath")
            .field("model", &M::model_name())
            .field("name", &self.metadata.name)
            .field("is_collection", &self.metadata.is_collection)
            .field("parent", &self.parent().map(|p| p.to_string()))
            .finish()
    }
}

impl<M: Model> fmt::Display for ModelPath<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_dyn(), f)
    }
}

#[cfg(feature = "serde")]
impl<M: Model> serde::Serialize for ModelPath<M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.as_dyn(), serializer)
    }
}

/// A scalar field of a model, addressed through a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldPath {
    model: &'static str,
    path: Vec<String>,
    field: String,
}

impl FieldPath {
    pub fn model_name(&self) -> &'static str {
        self.model
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment}.")?;
        }
        f.write_str(&self.field)
    }
}
