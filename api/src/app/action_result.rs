//! Tagged outcomes of controller operations
//!
//! Controllers return these directly; the HTTP layer decides how each tag
//! becomes a response.

/// Outcome of a single controller operation
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// The requested value
    Ok(T),
    /// A new resource, with the location it can be fetched from
    Created { value: T, location: String },
    /// Success with nothing to return
    NoContent,
    NotFound,
    BadRequest(String),
}

#[cfg(test)]
impl<T> ActionResult<T> {
    /// The carried value for `Ok` and `Created`
    pub fn value(&self) -> Option<&T> {
        match self {
            ActionResult::Ok(value) | ActionResult::Created { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ActionResult::Ok(value) | ActionResult::Created { value, .. } => Some(value),
            _ => None,
        }
    }
}
