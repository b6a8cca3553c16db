//! Serde support, behind the `serde` cargo feature.
//!
//! A heap serializes as its backing storage sequence, root first.
//! Deserialization is only offered for the default-ordered `Heap<T>`: a
//! custom comparator cannot be reconstructed from serialized data, so the
//! impl simply does not exist for other comparator types.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::heap::Heap;

impl<T: Serialize, F> Serialize for Heap<T, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for Heap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Heap::from_vec(items))
    }
}
