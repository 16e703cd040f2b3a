use crate::error::ScrumboardError;

pub type ScrumboardResult<T> = Result<T, ScrumboardError>;
