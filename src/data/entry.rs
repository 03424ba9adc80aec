use super::{Key, Value};

/// A single owned key/value pair, as stored inside a bucket.
///
/// Entries are never exposed to callers by reference: [`Table::get`](crate::Table::get)
/// always returns an owned clone of the value.
#[derive(Debug, Clone)]
pub struct Entry<K, V>
where
    K: Key,
    V: Value,
{
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V>
where
    K: Key,
    V: Value,
{
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
