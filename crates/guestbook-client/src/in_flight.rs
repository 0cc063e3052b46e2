//! In-Flight Guard
//!
//! Ignores a second trigger of the same action on the same target until the
//! first request settles.

use std::collections::HashSet;

/// An action and the entry it targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flight {
    Create,
    Update(u32),
    Delete(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    active: HashSet<Flight>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `flight` as started. `false` if it already is.
    pub fn try_begin(&mut self, flight: Flight) -> bool {
        self.active.insert(flight)
    }

    pub fn finish(&mut self, flight: Flight) {
        self.active.remove(&flight);
    }

    pub fn contains(&self, flight: Flight) -> bool {
        self.active.contains(&flight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_per_target() {
        let mut guard = InFlight::new();
        assert!(guard.try_begin(Flight::Delete(1)));
        assert!(!guard.try_begin(Flight::Delete(1)));
        assert!(guard.try_begin(Flight::Delete(2)));
        assert!(guard.try_begin(Flight::Update(1)));

        guard.finish(Flight::Delete(1));
        assert!(!guard.contains(Flight::Delete(1)));
        assert!(guard.try_begin(Flight::Delete(1)));
    }
}
