//! Event collections
//!
//! Wire form: `{<event>,<event>,...}`, e.g. `{0.00:1,0.50:2}`.
//! Only whitespace around the whole collection is insignificant.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{Event, KiirooError, KiirooResult};

/// Opening character of a collection
pub const LIST_OPEN: char = '{';

/// Closing character of a collection
pub const LIST_CLOSE: char = '}';

/// Separator between events in a collection
pub const LIST_SEPARATOR: char = ',';

/// An ordered series of events
///
/// Decoding keeps the order of the text. Canonical (time) order is opt-in
/// through [`Events::sorted`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Events(Vec<Event>);

impl Events {
    pub fn new() -> Self {
        Events(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Event] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&Event> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Event> {
        self.0.last()
    }

    pub fn into_vec(self) -> Vec<Event> {
        self.0
    }

    /// Time of the latest event, zero when empty
    pub fn duration(&self) -> Duration {
        self.0
            .iter()
            .map(Event::time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Sort by ascending time
    ///
    /// The sort is stable: events sharing a timestamp keep their relative order.
    pub fn sorted(mut self) -> Self {
        self.0.sort_by_key(Event::time);
        self
    }

    /// Is the collection already in canonical order?
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0].time() <= w[1].time())
    }

    /// Encode to wire text
    ///
    /// Fails without partial output if any event fails to encode.
    pub fn encode(&self) -> KiirooResult<String> {
        let values = self
            .0
            .iter()
            .map(Event::encode)
            .collect::<KiirooResult<Vec<_>>>()?;

        let mut text = String::with_capacity(values.iter().map(|v| v.len() + 1).sum::<usize>() + 1);
        text.push(LIST_OPEN);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                text.push(LIST_SEPARATOR);
            }
            text.push_str(value);
        }
        text.push(LIST_CLOSE);
        Ok(text)
    }

    /// Decode from wire text
    ///
    /// All-or-nothing: the first malformed event aborts the whole decode.
    /// Empty text and an empty body (`{}`) are `KiirooError::NoEvents`.
    pub fn decode(text: &str) -> KiirooResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("Rejected collection: empty text");
            return Err(KiirooError::NoEvents);
        }

        let body = trimmed
            .strip_prefix(LIST_OPEN)
            .and_then(|rest| rest.strip_suffix(LIST_CLOSE))
            .ok_or_else(|| {
                tracing::debug!("Rejected collection {:?}: missing braces", trimmed);
                KiirooError::EventFormat
            })?;

        if body.is_empty() {
            tracing::debug!("Rejected collection: no events between braces");
            return Err(KiirooError::NoEvents);
        }

        let events = body
            .split(LIST_SEPARATOR)
            .map(Event::decode)
            .collect::<KiirooResult<Vec<_>>>()?;

        tracing::trace!("Decoded {} events", events.len());
        Ok(Events(events))
    }
}

impl From<Vec<Event>> for Events {
    fn from(events: Vec<Event>) -> Self {
        Events(events)
    }
}

impl FromIterator<Event> for Events {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Events(iter.into_iter().collect())
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", LIST_OPEN)?;
        for (i, event) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", LIST_SEPARATOR)?;
            }
            write!(f, "{}", event)?;
        }
        write!(f, "{}", LIST_CLOSE)
    }
}

impl FromStr for Events {
    type Err = KiirooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Events::decode(s)
    }
}
