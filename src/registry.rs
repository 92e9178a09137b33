use crate::Listener;

/// Ordered collection of listeners waiting for the first interaction.
///
/// Insertion order is preserved and duplicates are allowed: a listener
/// added twice runs twice. This type does no locking and knows nothing
/// about firing; [`InteractionGate`](crate::InteractionGate) wraps it
/// with both.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener at the end.
    pub fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Appends listeners at the end, in iteration order.
    pub fn extend<I>(&mut self, listeners: I)
    where
        I: IntoIterator<Item = Listener>,
    {
        self.listeners.extend(listeners);
    }

    /// Removes the first entry that is the same listener as `listener`.
    ///
    /// Later duplicates stay in place. Returns false if nothing matched.
    pub fn remove_first(&mut self, listener: &Listener) -> bool {
        match self.listeners.iter().position(|l| l.same_as(listener)) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Takes every listener out, leaving the registry empty.
    pub fn drain(&mut self) -> Vec<Listener> {
        std::mem::take(&mut self.listeners)
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.listeners.iter().any(|l| l.same_as(listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.listeners.iter()
    }
}
