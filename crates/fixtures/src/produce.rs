use crate::value::Value;

/// What a recipe may return: nothing, to keep its draft, or a replacement.
pub trait RecipeOutput {
    fn into_replacement(self) -> Option<Value>;
}

impl RecipeOutput for () {
    fn into_replacement(self) -> Option<Value> {
        None
    }
}

impl RecipeOutput for Value {
    fn into_replacement(self) -> Option<Value> {
        Some(self)
    }
}

impl RecipeOutput for Option<Value> {
    fn into_replacement(self) -> Option<Value> {
        self
    }
}

/// Apply `recipe` to a draft of `base` and return the result.
///
/// The draft shares all structure with `base`; writes copy only the objects
/// on the written path, so `base` and anything read from it earlier are
/// left as they were. If the recipe returns a replacement value, that value
/// is the result and the draft is discarded.
pub fn produce<R, F>(base: &Value, recipe: F) -> Value
where
    R: RecipeOutput,
    F: FnOnce(&mut Value) -> R,
{
    let mut draft = base.clone();
    match recipe(&mut draft).into_replacement() {
        Some(replacement) => replacement,
        None => draft,
    }
}
