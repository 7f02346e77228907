#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

//! Provides [`serde::Serialize`] and [`serde::Deserialize`] support for
//! [`Timestamp`], using its canonical string form.

use crate::Timestamp;
use crate::MAX_FORMAT_LEN;
use std::fmt;

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buf = [0u8; MAX_FORMAT_LEN];
        serializer.serialize_str(self.format(&mut buf))
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 8601 timestamp string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Timestamp, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Timestamp, E>
    where
        E: serde::de::Error,
    {
        match crate::parse::sequential::scan(v) {
            Ok(parsed) if parsed.consumed == v.len() => Ok(parsed.value),
            Ok(_) => Err(E::custom(crate::Error::from(crate::ErrorKind::TrailingInput))),
            Err(err) => Err(E::custom(err)),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}
