//! Request header lookup.
//!
//! Hosts hand mappers whatever header collection they already hold. Header
//! names are matched ASCII case-insensitively, as HTTP requires; values are
//! returned as-is, without trimming or case folding.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only view of the inbound request's headers.
pub trait RequestHeaders {
    /// Value of the header with this name, ignoring ASCII case, if present.
    fn header(&self, name: &str) -> Option<&str>;
}

impl<T: RequestHeaders + ?Sized> RequestHeaders for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

impl<S: BuildHasher> RequestHeaders for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| find_ignore_case(self.iter(), name))
            .map(String::as_str)
    }
}

impl RequestHeaders for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| find_ignore_case(self.iter(), name))
            .map(String::as_str)
    }
}

fn find_ignore_case<'m>(
    mut entries: impl Iterator<Item = (&'m String, &'m String)>,
    name: &str,
) -> Option<&'m String> {
    entries
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Ordered header pairs. The first pair with a matching name wins.
impl<'a> RequestHeaders for [(&'a str, &'a str)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| *value)
    }
}

/// No headers at all.
impl RequestHeaders for () {
    fn header(&self, _name: &str) -> Option<&str> {
        None
    }
}
