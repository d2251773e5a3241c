// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Handle returned when registering a change listener, used to unregister it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered set of zero-argument change callbacks.
///
/// Callbacks run synchronously, in registration order, on the thread performing the mutation.
/// Once disposed, the collection drops every callback and never calls anything again.
#[derive(Default)]
pub(crate) struct ChangeListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut()>)>,
    disposed: bool,
}

impl ChangeListeners {
    pub(crate) fn add(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        if self.disposed {
            log::debug!("ignoring change listener registered after dispose");
        } else {
            self.entries.push((id, Box::new(listener)));
        }
        id
    }

    /// Returns `true` if a listener was registered under `id`.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self) {
        for (_, listener) in &mut self.entries {
            listener();
        }
    }

    pub(crate) fn dispose(&mut self) {
        self.entries.clear();
        self.disposed = true;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl core::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("next_id", &self.next_id)
            .field("entries", &self.entries.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
