//! Interned identifiers
//!
//! Part and group names arrive as strings from the scene loader, the config
//! file and every pointer event. They are interned once into a process-wide
//! table, so ids are `Copy` and every lookup on the click path hashes an
//! integer.

use std::fmt;

use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

static NAMES: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::new);

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Spur);

        impl $name {
            #[inline]
            #[must_use]
            pub fn new(name: &str) -> Self {
                Self(NAMES.get_or_intern(name))
            }

            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                NAMES.resolve(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                Ok(Self::new(&name))
            }
        }
    };
}

interned_id! {
    /// Stable part identifier: the mesh name in the loaded model.
    PartId
}

interned_id! {
    /// Identifier of a group of parts that share one toggle flag.
    GroupId
}

/// Key into the toggle store: either a single part or a whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Part(PartId),
    Group(GroupId),
}

impl From<PartId> for StateKey {
    fn from(id: PartId) -> Self {
        StateKey::Part(id)
    }
}

impl From<GroupId> for StateKey {
    fn from(id: GroupId) -> Self {
        StateKey::Group(id)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Part(id) => write!(f, "{id}"),
            StateKey::Group(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_id() {
        let a = PartId::new("Cube010_1");
        let b = PartId::from("Cube010_1");
        let c = PartId::new("Cube010_2");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "Cube010_1");
        assert_eq!(c.to_string(), "Cube010_2");
    }

    #[test]
    fn part_and_group_keys_stay_distinct() {
        let part = StateKey::from(PartId::new("allDrawers"));
        let group = StateKey::from(GroupId::new("allDrawers"));
        assert_ne!(part, group);
        assert_eq!(part.to_string(), group.to_string());
    }

    #[test]
    fn ids_serialize_as_names() {
        let id = GroupId::new("allLids");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"allLids\"");
        let back: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(format!("{id:?}"), "GroupId(\"allLids\")");
    }
}
