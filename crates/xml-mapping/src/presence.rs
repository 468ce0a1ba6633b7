/// Tri-state marker recording whether an optional XML construct appeared in the source.
///
/// Game configuration files distinguish between an element that is missing entirely and
/// one that is present but has no content (`<definitions />`). Collapsing both into
/// `Option` would turn one into the other on save, so mapped types hold optional child
/// elements as `Presence` instead.
///
/// | Source | Value |
/// |--------|-------|
/// | element missing | `Presence::Absent` |
/// | `<tag />` | `Presence::Empty` |
/// | `<tag a="1">...</tag>` | `Presence::Value(..)` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Presence<T> {
    #[default]
    Absent,
    Empty,
    Value(T),
}

impl<T> Presence<T> {
    /// Returns `true` when the construct appeared in the source, with or without content.
    #[inline]
    pub fn is_present(&self) -> bool {
        !matches!(self, Presence::Absent)
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    /// Returns `true` for the present-but-empty state only.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Presence::Empty)
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Presence::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Presence::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Presence::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Absent => Presence::Absent,
            Presence::Empty => Presence::Empty,
            Presence::Value(value) => Presence::Value(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Presence<U> {
        match self {
            Presence::Absent => Presence::Absent,
            Presence::Empty => Presence::Empty,
            Presence::Value(value) => Presence::Value(f(value)),
        }
    }

    /// Takes the current state out, leaving `Absent` behind.
    pub fn take(&mut self) -> Presence<T> {
        std::mem::take(self)
    }

    /// Marks the construct present and returns its value, creating it when needed.
    ///
    /// Used by editors that populate a previously absent or empty element.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if !matches!(self, Presence::Value(_)) {
            *self = Presence::Value(f());
        }
        match self {
            Presence::Value(value) => value,
            _ => unreachable!("presence was just set to a value"),
        }
    }
}

impl<T: Default> Presence<T> {
    /// Converts to `Option`, mapping the present-but-empty state to `T::default()`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Absent => None,
            Presence::Empty => Some(T::default()),
            Presence::Value(value) => Some(value),
        }
    }
}

impl<T> Presence<Vec<T>> {
    /// Number of items for collection-valued presences, zero when absent or empty.
    pub fn len(&self) -> usize {
        self.value().map_or(0, Vec::len)
    }

    pub fn items(&self) -> &[T] {
        self.value().map_or(&[], Vec::as_slice)
    }
}

impl<T> From<Option<T>> for Presence<T> {
    /// `Some` becomes `Value`: a populated field is always treated as present.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Presence::Value(value),
            None => Presence::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let presence: Presence<u32> = Presence::default();
        assert!(presence.is_absent());
        assert!(!presence.is_present());
    }

    #[test]
    fn test_empty_counts_as_present() {
        let presence: Presence<u32> = Presence::Empty;
        assert!(presence.is_present());
        assert!(presence.is_empty());
        assert_eq!(presence.value(), None);
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Presence::<u32>::Absent.into_option(), None);
        assert_eq!(Presence::<u32>::Empty.into_option(), Some(0));
        assert_eq!(Presence::Value(7u32).into_option(), Some(7));
    }

    #[test]
    fn test_get_or_insert_with_marks_present() {
        let mut presence: Presence<Vec<u32>> = Presence::Empty;
        presence.get_or_insert_with(Vec::new).push(3);
        assert_eq!(presence, Presence::Value(vec![3]));
        assert_eq!(presence.len(), 1);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Presence::from(Some("a")), Presence::Value("a"));
        assert_eq!(Presence::<&str>::from(None), Presence::Absent);
    }
}
