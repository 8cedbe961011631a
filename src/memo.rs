use std::future::Future;

/// A lazily filled slot that computes its value at most once.
///
/// The cell is a plain `Option<T>` checked before every computation and set after
/// the first success. Initialisation requires `&mut self`, so sharing a `Memo`
/// across threads needs an outer lock; nothing here synchronises.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    value: Option<T>,
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// Return the cached value, computing it with `init` on the first call.
    pub fn get_or_init<F>(&mut self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.value.get_or_insert_with(init)
    }

    /// Async, fallible counterpart of [`Memo::get_or_init`].
    ///
    /// An error leaves the slot empty so the next call tries again.
    pub async fn get_or_try_init<F, Fut, E>(&mut self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = match self.value.take() {
            Some(value) => {
                tracing::debug!("memo hit");
                value
            }
            None => init().await?,
        };
        Ok(&*self.value.insert(value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
