//! Single-value state owner for a screen.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Owns one piece of screen state and applies events to it one at a time.
///
/// The processor future runs for as long as any clone of the Actor is alive.
/// Dropping the last clone (the screen was navigated away from) cancels it,
/// together with whatever it was waiting on.
///
/// ```rust
/// let (tag_selected_relay, mut tag_selected_stream) = relay();
/// let selected_tag = Actor::new(Selection::All, async move |state| {
///     while let Some(tag) = tag_selected_stream.next().await {
///         state.set_neq(tag);
///     }
/// });
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Derived signal without cloning the whole state on every change.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}
