use crate::uri::PreviewUri;
use tokio::sync::broadcast;

/// Broadcasts changed preview URIs to every subscribed host listener.
///
/// The host subscribes so it knows when to re-query the provider for a URI.
/// Nothing in this crate fires the stream on its own — [`fire`] is the
/// public refresh hook for external callers.
///
/// [`fire`]: ChangeBroadcaster::fire
#[derive(Clone)]
pub struct ChangeBroadcaster {
    tx: broadcast::Sender<PreviewUri>,
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Signal that the content behind `uri` should be re-fetched.
    pub fn fire(&self, uri: PreviewUri) {
        // Ignore errors — no subscribers is fine
        let _ = self.tx.send(uri);
    }

    /// Subscribe to the change stream.
    pub fn subscribe(&self) -> broadcast::Receiver<PreviewUri> {
        self.tx.subscribe()
    }
}
