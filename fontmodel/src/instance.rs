//! Named instances and their user-space locations.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize};
use write_fonts::types::Tag;

/// A set of per-axis user-space coordinates.
///
/// Keyed by tag so identical locations compare, order, and hash identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(BTreeMap<Tag, OrderedFloat<f64>>);

impl Location {
    pub fn new() -> Location {
        Default::default()
    }

    pub fn insert(&mut self, tag: Tag, value: f64) -> &mut Location {
        self.0.insert(tag, value.into());
        self
    }

    pub fn get(&self, tag: Tag) -> Option<f64> {
        self.0.get(&tag).map(|v| v.into_inner())
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains_key(&tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, f64)> + '_ {
        self.0.iter().map(|(tag, value)| (*tag, value.into_inner()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Tag, f64)> for Location {
    fn from_iter<I: IntoIterator<Item = (Tag, f64)>>(iter: I) -> Self {
        Location(
            iter.into_iter()
                .map(|(tag, value)| (tag, value.into()))
                .collect(),
        )
    }
}

impl From<Vec<(Tag, f64)>> for Location {
    fn from(value: Vec<(Tag, f64)>) -> Self {
        value.into_iter().collect()
    }
}

// Serialized as a sequence of (tag, value) pairs; mappings keyed by
// non-string types are a YAML portability headache.
impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (tag, value) in self.0.iter() {
            seq.serialize_element(&(tag, value.into_inner()))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<(Tag, f64)>::deserialize(deserializer).map(|pairs| pairs.into_iter().collect())
    }
}

/// A named instance, e.g. "Bold Condensed", pinned to one location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub style_name: String,
    pub location: Location,
}

impl Instance {
    pub fn new(style_name: impl Into<String>, location: Location) -> Instance {
        Instance {
            style_name: style_name.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use write_fonts::types::Tag;

    use super::{Instance, Location};

    fn wght_wdth() -> Location {
        vec![(Tag::new(b"wght"), 400.0), (Tag::new(b"wdth"), 100.0)].into()
    }

    #[test]
    fn location_orders_by_tag() {
        let loc = wght_wdth();
        let tags: Vec<_> = loc.iter().map(|(tag, _)| tag).collect();
        assert_eq!(vec![Tag::new(b"wdth"), Tag::new(b"wght")], tags);
    }

    #[test]
    fn location_yaml_round_trip() {
        let loc = wght_wdth();
        let yml = serde_yaml::to_string(&loc).unwrap();
        assert_eq!(loc, serde_yaml::from_str(&yml).unwrap());
    }

    #[test]
    fn instance_yaml_round_trip() {
        let instance = Instance::new("Bold", vec![(Tag::new(b"wght"), 700.0)].into());
        let yml = serde_yaml::to_string(&instance).unwrap();
        assert_eq!(instance, serde_yaml::from_str::<Instance>(&yml).unwrap());
    }

    #[test]
    fn insert_overwrites() {
        let mut loc = Location::new();
        loc.insert(Tag::new(b"wght"), 400.0);
        loc.insert(Tag::new(b"wght"), 700.0);
        assert_eq!(Some(700.0), loc.get(Tag::new(b"wght")));
        assert_eq!(1, loc.len());
    }
}
