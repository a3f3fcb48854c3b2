//! Models of the application schema and their property paths.

use crate::model::Model;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl Model for Todo {
    fn model_name() -> &'static str {
        "Todo"
    }

    fn fields() -> &'static [&'static str] {
        &["id", "name", "description"]
    }
}

crate::model_path!(Todo);
