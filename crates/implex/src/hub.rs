//! Delivery Hub
//!
//! Routes implementor maps to an attached host, or stages them in the
//! pending slot until one attaches. The hub is owned by the host
//! application and passed by reference into loading code; there is no
//! process-wide registration state.

use tracing::{debug, info};

use crate::pending::{PendingPolicy, PendingSlot};
use crate::types::ImplementorMap;

/// Host-provided registration capability.
///
/// Accepts an implementor map and takes ownership of it. Registration is
/// infallible by contract.
pub trait RegisterImplementors {
    fn register_implementors(&mut self, map: ImplementorMap);
}

/// Outcome of a single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The host was attached and received the map synchronously.
    Delivered,
    /// No host yet; the map was staged in the pending slot.
    Buffered,
}

/// Deliver-now-or-buffer dispatch point for implementor maps.
#[derive(Debug, Default)]
pub struct DeliveryHub<H: RegisterImplementors> {
    host: Option<H>,
    pending: PendingSlot,
}

impl<H: RegisterImplementors> DeliveryHub<H> {
    /// Hub with no host attached and an empty pending slot.
    pub fn new() -> Self {
        Self {
            host: None,
            pending: PendingSlot::new(),
        }
    }

    pub fn with_policy(policy: PendingPolicy) -> Self {
        Self {
            host: None,
            pending: PendingSlot::with_policy(policy),
        }
    }

    pub fn with_host(host: H) -> Self {
        Self {
            host: Some(host),
            pending: PendingSlot::new(),
        }
    }

    /// Whether a registration capability is currently attached.
    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Deliver a map to the host, or stage it if no host is attached.
    ///
    /// The host is invoked synchronously, exactly once, with the whole map.
    /// Buffering follows the slot's `PendingPolicy`.
    pub fn load(&mut self, map: ImplementorMap) -> Delivery {
        match self.host.as_mut() {
            Some(host) => {
                debug!(
                    libraries = map.library_count(),
                    "Delivering implementor map to attached host"
                );
                host.register_implementors(map);
                Delivery::Delivered
            }
            None => {
                self.pending.stage(map);
                Delivery::Buffered
            }
        }
    }

    /// Attach a host, draining any staged map into it first.
    ///
    /// The pending slot is cleared so the staged map cannot be registered
    /// twice. Replaces any previously attached host.
    pub fn attach(&mut self, mut host: H) {
        if let Some(map) = self.pending.take() {
            info!(
                libraries = map.library_count(),
                "Draining pending implementor map into newly attached host"
            );
            host.register_implementors(map);
        }
        self.host = Some(host);
    }

    /// Detach and return the host, if any.
    pub fn detach(&mut self) -> Option<H> {
        self.host.take()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn pending(&self) -> Option<&ImplementorMap> {
        self.pending.peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host that records every map it is handed.
    #[derive(Default)]
    struct CaptureHost {
        received: Vec<ImplementorMap>,
    }

    impl RegisterImplementors for CaptureHost {
        fn register_implementors(&mut self, map: ImplementorMap) {
            self.received.push(map);
        }
    }

    fn alpha_map() -> ImplementorMap {
        let mut map = ImplementorMap::new();
        map.insert("alpha", vec!["x".to_string()]);
        map
    }

    #[test]
    fn test_host_present_delivers_once_and_skips_buffer() {
        let mut hub = DeliveryHub::with_host(CaptureHost::default());
        assert!(hub.has_host());

        let outcome = hub.load(alpha_map());
        assert_eq!(outcome, Delivery::Delivered);
        assert!(hub.pending().is_none());

        let host = hub.detach().unwrap();
        assert_eq!(host.received.len(), 1);
        assert_eq!(host.received[0].entries("alpha").unwrap(), ["x"]);
    }

    #[test]
    fn test_host_absent_buffers_without_invoking() {
        let mut hub: DeliveryHub<CaptureHost> = DeliveryHub::new();
        assert!(!hub.has_host());

        let outcome = hub.load(alpha_map());
        assert_eq!(outcome, Delivery::Buffered);
        assert_eq!(hub.pending().unwrap().entries("alpha").unwrap(), ["x"]);
    }

    #[test]
    fn test_attach_drains_buffer_and_clears_it() {
        let mut hub: DeliveryHub<CaptureHost> = DeliveryHub::new();
        hub.load(alpha_map());

        hub.attach(CaptureHost::default());
        assert!(hub.pending().is_none());

        let host = hub.detach().unwrap();
        assert_eq!(host.received.len(), 1);
        assert_eq!(host.received[0].entries("alpha").unwrap(), ["x"]);
    }

    #[test]
    fn test_attach_with_empty_buffer_registers_nothing() {
        let mut hub: DeliveryHub<CaptureHost> = DeliveryHub::new();
        hub.attach(CaptureHost::default());

        let host = hub.detach().unwrap();
        assert!(host.received.is_empty());
    }

    #[test]
    fn test_double_load_without_host_overwrites_buffer() {
        let mut hub: DeliveryHub<CaptureHost> = DeliveryHub::new();
        hub.load(alpha_map());

        let mut second = ImplementorMap::new();
        second.insert("beta", vec!["y".to_string()]);
        hub.load(second);

        let pending = hub.pending().unwrap();
        assert!(pending.entries("alpha").is_none());
        assert_eq!(pending.entries("beta").unwrap(), ["y"]);
    }

    #[test]
    fn test_load_after_attach_delivers_directly() {
        let mut hub: DeliveryHub<CaptureHost> = DeliveryHub::new();
        hub.load(alpha_map());
        hub.attach(CaptureHost::default());

        let mut second = ImplementorMap::new();
        second.insert("beta", vec!["y".to_string()]);
        assert_eq!(hub.load(second), Delivery::Delivered);

        let host = hub.detach().unwrap();
        assert_eq!(host.received.len(), 2);
    }
}
