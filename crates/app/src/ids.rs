//! Typed Object Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Document identifier tagged with the record type it belongs to.
pub struct TypedId<T>(ObjectId, PhantomData<T>);

impl<T> TypedId<T> {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from_object_id(ObjectId::new())
    }

    pub const fn from_object_id(id: ObjectId) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_object_id(self) -> ObjectId {
        self.0
    }

    /// Lowercase hex form used on the wire.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl<T> Default for TypedId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = oid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(value).map(Self::from_object_id)
    }
}

impl<T> From<ObjectId> for TypedId<T> {
    fn from(value: ObjectId) -> Self {
        Self::from_object_id(value)
    }
}

impl<T> From<TypedId<T>> for ObjectId {
    fn from(value: TypedId<T>) -> Self {
        value.into_object_id()
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ObjectId::deserialize(deserializer).map(Self::from_object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    type MarkerId = TypedId<Marker>;

    #[test]
    fn parses_hex_object_ids() {
        let id: Result<MarkerId, _> = "65f1c0ffee00000000000001".parse();

        assert_eq!(
            id.map(|id| id.to_hex()).ok().as_deref(),
            Some("65f1c0ffee00000000000001")
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!("not-an-id".parse::<MarkerId>().is_err());
        assert!("123".parse::<MarkerId>().is_err());
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(MarkerId::new(), MarkerId::new());
    }
}
