use thiserror::Error as ThisError;

///
/// PathError
///
/// Construction of a path node never fails; only the operations that hand
/// a path to outside code validate it.
///

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PathError {
    #[error("model `{model}` has no field named `{field}`")]
    UnknownField { model: &'static str, field: String },

    #[error(
        "path `{path}` starts at `{found_root}` of model `{found}`, expected `{expected_root}` of model `{expected}`"
    )]
    ForeignRoot {
        path: String,
        found_root: String,
        found: &'static str,
        expected_root: String,
        expected: &'static str,
    },

    #[error("path `{path}` contains an unnamed segment")]
    EmptyName { path: String },
}
