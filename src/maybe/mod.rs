//! An optional value, the result type underlying every parser.

/// Either no value at all, or exactly one. Unlike `Result` there is no
/// information about why a value is absent; a failed parse is simply
/// `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maybe<T> {
    Nothing,
    Just(T),
}

pub use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    /// The monadic return: lift a value into `Just`.
    pub fn wrap(value: T) -> Maybe<T> {
        Just(value)
    }

    /// Sequence a computation onto this value. When `self` is `Nothing` the
    /// function is never called.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Nothing => Nothing,
            Just(value) => f(value),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Just(f(value)))
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}
