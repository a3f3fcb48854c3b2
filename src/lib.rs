use std::{any::TypeId, fmt, sync::Arc};

pub mod error;
pub mod includes;
pub mod model;
pub mod models;
pub mod path;
pub mod prelude;
pub mod traversal;

pub use error::PathError;
pub use path::{FieldPath, ModelPath};

/// name every generated root path carries
pub const ROOT_PATH_NAME: &str = "root";

/// A node in a property-path tree.
///
/// Every typed [`ModelPath`] implements this trait, which lets a parent be
/// a node of any model type. The trait is object safe; parents are held as
/// `Arc<dyn PropertyPath>` and never mutated through the child.
pub trait PropertyPath: Send + Sync + 'static {
    fn metadata(&self) -> &PropertyPathMetadata;

    /// name of the model this node points at, e.g. `"Todo"`
    fn model_name(&self) -> &'static str;

    fn model_type_id(&self) -> TypeId;

    #[inline]
    fn name(&self) -> &str {
        &self.metadata().name
    }

    #[inline]
    fn is_collection(&self) -> bool {
        self.metadata().is_collection
    }

    #[inline]
    fn parent(&self) -> Option<&Arc<dyn PropertyPath>> {
        self.metadata().parent.as_ref()
    }
}

/// The `(name, is_collection, parent)` triple a path node is built from.
#[derive(Clone)]
pub struct PropertyPathMetadata {
    pub(crate) name: String,
    pub(crate) is_collection: bool,
    pub(crate) parent: Option<Arc<dyn PropertyPath>>,
}

impl PropertyPathMetadata {
    pub fn new(
        name: impl Into<String>,
        is_collection: bool,
        parent: Option<Arc<dyn PropertyPath>>,
    ) -> Self {
        Self {
            name: name.into(),
            is_collection,
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_collection(&self) -> bool {
        self.is_collection
    }

    pub fn parent(&self) -> Option<&Arc<dyn PropertyPath>> {
        self.parent.as_ref()
    }
}

/// parents are compared structurally, all the way up to the root
impl PartialEq for PropertyPathMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.is_collection == other.is_collection
            && parents_eq(self.parent.as_ref(), other.parent.as_ref())
    }
}

/// walks both chains in step; chains may be arbitrarily deep
fn parents_eq(
    mut lhs: Option<&Arc<dyn PropertyPath>>,
    mut rhs: Option<&Arc<dyn PropertyPath>>,
) -> bool {
    loop {
        match (lhs, rhs) {
            (None, None) => return true,
            (Some(l), Some(r)) => {
                if Arc::ptr_eq(l, r) {
                    return true;
                }
                if l.model_type_id() != r.model_type_id()
                    || l.name() != r.name()
                    || l.is_collection() != r.is_collection()
                {
                    return false;
                }
                lhs = l.parent();
                rhs = r.parent();
            }
            _ => return false,
        }
    }
}

impl Eq for PropertyPathMetadata {}

impl fmt::Debug for PropertyPathMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyPathMetadata")
            .field("name", &self.name)
            .field("is_collection", &self.is_collection)
            .field("parent", &self.parent.as_ref().map(|p| p.to_string()))
            .finish()
    }
}

impl PartialEq for dyn PropertyPath {
    fn eq(&self, other: &Self) -> bool {
        self.model_type_id() == other.model_type_id() && self.metadata() == other.metadata()
    }
}

impl Eq for dyn PropertyPath {}

impl fmt::Debug for dyn PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyPath")
            .field("model", &self.model_name())
            .field("name", &self.name())
            .field("is_collection", &self.is_collection())
            .field("parent", &self.parent().map(|p| p.to_string()))
            .finish()
    }
}

/// renders the names from the root down to this node, joined by `.`
impl fmt::Display for dyn PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

#[cfg(feature = "serde")]
mod impl_serialize {
    use serde::{Serialize, Serializer, ser::SerializeStruct};

    use super::{PropertyPath, PropertyPathMetadata};

    impl Serialize for dyn PropertyPath {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut worker = serializer.serialize_struct("PropertyPath", 4)?;
            worker.serialize_field("model", self.model_name())?;
            worker.serialize_field("name", self.name())?;
            worker.serialize_field("is_collection", &self.is_collection())?;
            worker.serialize_field("parent", &self.parent().map(|p| &**p))?;
            worker.end()
        }
    }

    impl Serialize for PropertyPathMetadata {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut worker = serializer.serialize_struct("PropertyPathMetadata", 3)?;
            worker.serialize_field("name", &self.name)?;
            worker.serialize_field("is_collection", &self.is_collection)?;
            worker.serialize_field("parent", &self.parent.as_ref().map(|p| &**p))?;
            worker.end()
        }
    }
}

/// Declares the path type of one or more models.
///
/// `model_path!(Todo)` expands to `pub type TodoPath = ModelPath<Todo>;`
/// and a `Todo::root_path()` constructor. It has to be invoked in the
/// crate that defines the model.
#[macro_export]
macro_rules! model_path {
    ($($model:ident),+ $(,)?) => {$(
        $crate::prelude::macro_model_path::paste! {
            #[doc = "Property path node for the `" $model "` model."]
            pub type [<$model Path>] = $crate::path::ModelPath<$model>;

            impl $model {
                /// the root node every path of this model starts from
                pub fn root_path() -> [<$model Path>] {
                    $crate::path::ModelPath::root()
                }
            }
        }
    )+};
}
