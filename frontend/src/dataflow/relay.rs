//! Event channel from the views to the Actors that own screen state.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Typed event channel feeding an Actor.
///
/// Relays are named after the event source: `search_term_changed_relay`,
/// `tag_selected_relay`, `submit_pressed_relay`. Each relay is sent from one
/// place in the code only; debug builds panic on a second call site.
///
/// ```rust
/// let (tag_selected_relay, mut tag_selected_stream) = relay::<Selection>();
/// tag_selected_relay.send(Selection::from("Rust"));
/// // inside the Actor loop
/// while let Some(tag) = tag_selected_stream.next().await { /* ... */ }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[derive(Debug, Clone)]
pub enum RelayError {
    /// The receiving Actor is gone, usually because its screen was unmounted.
    ChannelClosed,
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        let relay = Relay {
            sender,
            #[cfg(debug_assertions)]
            emit_location: Arc::new(OnceLock::new()),
        };
        (relay, receiver)
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Sends an event. Events sent after the receiver is dropped are discarded,
    /// which is what happens to a pending form timer after navigating away.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.check_single_source() {
            panic!("{:?}", error);
        }
        let _ = self.sender.unbounded_send(value);
    }

    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (search_term_changed_relay, mut stream) = relay::<String>();

        for term in ["r", "ru", "rus"] {
            search_term_changed_relay.send(term.to_string());
        }

        assert_eq!(stream.next().await.as_deref(), Some("r"));
        assert_eq!(stream.next().await.as_deref(), Some("ru"));
        assert_eq!(stream.next().await.as_deref(), Some("rus"));
    }

    #[tokio::test]
    async fn test_send_after_unmount_is_discarded() {
        let (submit_pressed_relay, stream) = relay::<()>();
        drop(stream);

        assert!(matches!(
            submit_pressed_relay.try_send(()),
            Err(RelayError::ChannelClosed)
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "MultipleEmitters")]
    fn test_second_call_site_panics() {
        let (tag_selected_relay, _stream) = relay::<u8>();
        tag_selected_relay.send(1);
        tag_selected_relay.send(2);
    }
}
