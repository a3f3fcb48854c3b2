use convert_case::{Case, Casing};

/// A schema-defined entity that property paths can point at.
///
/// Implemented once per model, next to the `model_path!` invocation that
/// declares the model's path type.
pub trait Model: Sized + 'static {
    /// model name as declared in the schema, e.g. `"Todo"`
    fn model_name() -> &'static str;

    /// scalar fields a [`FieldPath`](crate::FieldPath) may reference
    fn fields() -> &'static [&'static str];

    fn model_name_lower_case() -> String {
        Self::model_name().to_case(Case::Snake)
    }

    fn has_field(field: &str) -> bool {
        Self::fields().iter().any(|known| *known == field)
    }
}
