use std::fmt;
use std::sync::Arc;

/// A callback to run once, on the first interaction.
///
/// Cloning a `Listener` shares the underlying closure, so every clone
/// compares equal to the original. Two listeners built from separate
/// closures never compare equal, even if the closures are identical.
/// Keep a clone around if you want to remove the listener later.
///
/// # Example
///
/// ```rust
/// use first_interaction::Listener;
///
/// let a = Listener::new(|| println!("hello"));
/// let b = a.clone();
/// let c = Listener::new(|| println!("hello"));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Clone)]
pub struct Listener(Arc<dyn Fn() + Send + Sync + 'static>);

impl Listener {
    /// Wraps a closure as a listener.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the listener.
    pub fn call(&self) {
        (self.0)()
    }

    /// Returns true if both handles point at the same closure.
    pub fn same_as(&self, other: &Listener) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", self.addr())
    }
}

impl<F> From<F> for Listener
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
