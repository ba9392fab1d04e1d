//! Atom: a plain settable value built on Actor + Relay.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

/// Local screen state that only ever gets replaced wholesale, like the blog
/// search text or the selected skill category.
///
/// Updates go through a relay, so an Atom obeys the same sequential-update
/// rule as any other Actor.
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<T>,
}

impl<T> Atom<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (setter, mut setter_stream) = relay();
        let actor = Actor::new(initial, async move |state| {
            while let Some(value) = setter_stream.next().await {
                state.set_neq(value);
            }
        });
        Self { actor, setter }
    }

    #[track_caller]
    pub fn set(&self, value: T) {
        self.setter.send(value);
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
