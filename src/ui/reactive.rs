//! Reactive query bookkeeping.
//!
//! A [`QueryWatcher`] remembers the input key of the last request it issued.
//! A new request is issued only when the key changes (or on an explicit
//! reissue), and every request carries a [`QueryTicket`] so a response can be
//! checked against the newest request when it arrives. Responses to
//! superseded tickets are dropped; in-flight requests are never aborted.

/// Identifies one issued request: its input snapshot and generation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTicket<K> {
    key: K,
    generation: u64,
}

impl<K> QueryTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryWatcher<K> {
    generation: u64,
    issued: Option<K>,
    in_flight: bool,
}

impl<K> Default for QueryWatcher<K> {
    fn default() -> Self {
        Self {
            generation: 0,
            issued: None,
            in_flight: false,
        }
    }
}

impl<K: Clone + PartialEq> QueryWatcher<K> {
    /// Issue a request for `key` unless it equals the last issued key.
    pub fn observe(&mut self, key: K) -> bool {
        if self.issued.as_ref() == Some(&key) {
            return false;
        }
        self.issue(key);
        true
    }

    /// Issue a fresh request for the last issued key.
    pub fn reissue(&mut self) -> bool {
        match self.issued.clone() {
            Some(key) => {
                self.issue(key);
                true
            }
            None => false,
        }
    }

    /// Forget the last key and supersede anything in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.issued = None;
        self.in_flight = false;
    }

    /// The outstanding ticket, if one was issued after `generation`.
    pub fn issued_since(&self, generation: u64) -> Option<QueryTicket<K>> {
        if !self.in_flight || self.generation <= generation {
            return None;
        }
        self.issued.clone().map(|key| QueryTicket {
            key,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: &QueryTicket<K>) -> bool {
        self.in_flight && ticket.generation == self.generation
    }

    /// Close the loading window of `ticket`. Returns false for stale tickets.
    pub fn settle(&mut self, ticket: &QueryTicket<K>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> Option<&K> {
        self.issued.as_ref()
    }

    fn issue(&mut self, key: K) {
        self.generation += 1;
        self.issued = Some(key);
        self.in_flight = true;
    }
}
