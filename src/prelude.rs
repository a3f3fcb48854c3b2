pub use crate::PropertyPath;
pub use crate::PropertyPathMetadata;
pub use crate::error::PathError;
pub use crate::includes::Includes;
pub use crate::model::Model;
pub use crate::path::{FieldPath, ModelPath};

pub mod models {
    pub use crate::models::{Todo, TodoPath};
}

#[doc(hidden)]
pub mod macro_model_path {
    pub use paste::paste;
}
