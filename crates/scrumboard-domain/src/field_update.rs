/// A single-field edit for partial updates
///
/// - `NoChange`: leave the field alone
/// - `Set(value)`: write the value
/// - `Clear`: clear the field
///
/// # Example
///
/// ```
/// use scrumboard_domain::FieldUpdate;
///
/// let email: FieldUpdate<String> = FieldUpdate::from_flags(None, true);
/// assert_eq!(email, FieldUpdate::Clear);
///
/// let name = FieldUpdate::from_flags(Some("Sara".to_string()), false);
/// assert_eq!(name, FieldUpdate::Set("Sara".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Build an update from a "new value" option and a "clear" switch, the
    /// shape command-line flags arrive in. A value wins over the switch.
    pub fn from_flags(value: Option<T>, clear: bool) -> Self {
        match (value, clear) {
            (Some(value), _) => FieldUpdate::Set(value),
            (None, true) => FieldUpdate::Clear,
            (None, false) => FieldUpdate::NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(FieldUpdate::<i32>::from_flags(None, false), FieldUpdate::NoChange);
        assert_eq!(FieldUpdate::<i32>::from_flags(None, true), FieldUpdate::Clear);
        assert_eq!(FieldUpdate::from_flags(Some(4), true), FieldUpdate::Set(4));
    }
}
