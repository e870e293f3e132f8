//! Device — the single record kind held by the registry.
//!
//! Request bodies are never decoded straight into a [`Device`]. They are
//! decoded into a [`DevicePatch`] whose present fields are then written onto
//! a base record: an empty one on create, the stored one on update. Fields the
//! body omits (or sets to `null`) keep the base value.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DecodeError;

/// A registered device. Every field is free text and none is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Build a fresh device from a decoded body.
    #[must_use]
    pub fn from_patch(patch: DevicePatch) -> Self {
        Self::default().merged(patch)
    }

    /// Overwrite every field present in `patch`.
    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Owned variant of [`apply`](Self::apply).
    #[must_use]
    pub fn merged(mut self, patch: DevicePatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    inner: Device,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = id.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.inner.status = status.into();
        self
    }

    /// Consume the builder and return the [`Device`].
    #[must_use]
    pub fn build(self) -> Device {
        self.inner
    }
}

/// The fields a request body supplied. `None` means absent or `null`.
///
/// Keys are matched to fields case-insensitively and applied in document
/// order, so a later key for the same field wins. A `null` value leaves the
/// field as it was. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicePatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl DevicePatch {
    /// Decode the first JSON value of `body`.
    ///
    /// Bytes after the first value are not inspected. A top-level `null`
    /// yields an empty patch. Invalid UTF-8 is replaced with U+FFFD before
    /// decoding.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EmptyBody`] when `body` holds no JSON value,
    /// [`DecodeError::Json`] when the value is malformed or carries a known
    /// field whose value is neither a string nor `null`, and
    /// [`DecodeError::NotAnObject`] for any other top-level value.
    pub fn from_json(body: &[u8]) -> Result<Self, DecodeError> {
        let text = String::from_utf8_lossy(body);
        let decoded = serde_json::Deserializer::from_str(&text)
            .into_iter::<Decoded>()
            .next()
            .ok_or(DecodeError::EmptyBody)??;
        match decoded {
            Decoded::Null => Ok(Self::default()),
            Decoded::Object(patch) => Ok(patch),
            Decoded::Other(kind) => Err(DecodeError::NotAnObject(kind)),
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        if key_matches(key, "id") {
            Some(&mut self.id)
        } else if key_matches(key, "name") {
            Some(&mut self.name)
        } else if key_matches(key, "description") {
            Some(&mut self.description)
        } else if key_matches(key, "status") {
            Some(&mut self.status)
        } else {
            None
        }
    }
}

/// Compare a JSON key against a lowercase ASCII field name, ignoring case.
///
/// U+017F and U+212A fold to `s` and `k` under Unicode simple case folding,
/// so they match too.
fn key_matches(key: &str, field: &str) -> bool {
    let mut chars = key.chars();
    field
        .chars()
        .all(|expected| chars.next().is_some_and(|c| fold(c) == expected))
        && chars.next().is_none()
}

fn fold(c: char) -> char {
    match c {
        '\u{17f}' => 's',
        '\u{212a}' => 'k',
        _ => c.to_ascii_lowercase(),
    }
}

/// First JSON value of a body, classified.
enum Decoded {
    Null,
    Object(DevicePatch),
    Other(&'static str),
}

impl<'de> Deserialize<'de> for Decoded {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecodedVisitor)
    }
}

struct DecodedVisitor;

impl<'de> Visitor<'de> for DecodedVisitor {
    type Value = Decoded;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a device object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decoded, E> {
        Ok(Decoded::Null)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Decoded, E> {
        Ok(Decoded::Other("bool"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Decoded, E> {
        Ok(Decoded::Other("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Decoded, E> {
        Ok(Decoded::Other("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Decoded, E> {
        Ok(Decoded::Other("number"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Decoded, E> {
        Ok(Decoded::Other("string"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Decoded, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Decoded::Other("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Decoded, A::Error> {
        let mut patch = DevicePatch::default();
        while let Some(key) = map.next_key::<String>()? {
            match patch.field_mut(&key) {
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = Some(value);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(Decoded::Object(patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Device {
        Device::builder()
            .id("d1")
            .name("A")
            .description("porch light")
            .status("on")
            .build()
    }

    #[test]
    fn should_keep_omitted_fields_when_applying_partial_patch() {
        let patch = DevicePatch::from_json(br#"{"status":"off"}"#).unwrap();
        let merged = stored().merged(patch);

        assert_eq!(merged.id, "d1");
        assert_eq!(merged.name, "A");
        assert_eq!(merged.description, "porch light");
        assert_eq!(merged.status, "off");
    }

    #[test]
    fn should_keep_field_when_patch_sets_it_to_null() {
        let patch = DevicePatch::from_json(br#"{"name":null,"status":"off"}"#).unwrap();
        let merged = stored().merged(patch);
        assert_eq!(merged.name, "A");
        assert_eq!(merged.status, "off");
    }

    #[test]
    fn should_overwrite_id_when_patch_carries_one() {
        let patch = DevicePatch::from_json(br#"{"id":"other"}"#).unwrap();
        assert_eq!(stored().merged(patch).id, "other");
    }

    #[test]
    fn should_build_empty_strings_for_missing_fields_on_create() {
        let patch = DevicePatch::from_json(br#"{"id":"d2","name":"B"}"#).unwrap();
        let device = Device::from_patch(patch);
        assert_eq!(device, Device::builder().id("d2").name("B").build());
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let patch = DevicePatch::from_json(br#"{"id":"d1","colour":"red","n":5}"#).unwrap();
        assert_eq!(patch.id.as_deref(), Some("d1"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn should_decode_only_the_first_value() {
        let patch = DevicePatch::from_json(b"{\"id\":\"d1\"}\n{not json").unwrap();
        assert_eq!(patch.id.as_deref(), Some("d1"));
    }

    #[test]
    fn should_decode_top_level_null_as_empty_patch() {
        let patch = DevicePatch::from_json(b"null").unwrap();
        assert_eq!(patch, DevicePatch::default());
    }

    #[test]
    fn should_reject_empty_body() {
        assert!(matches!(
            DevicePatch::from_json(b""),
            Err(DecodeError::EmptyBody)
        ));
        assert!(matches!(
            DevicePatch::from_json(b"  \n"),
            Err(DecodeError::EmptyBody)
        ));
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(matches!(
            DevicePatch::from_json(b"{not json"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn should_reject_non_object_value() {
        assert!(matches!(
            DevicePatch::from_json(br#"["d1","A","","on"]"#),
            Err(DecodeError::NotAnObject("array"))
        ));
        assert!(matches!(
            DevicePatch::from_json(b"-4.5"),
            Err(DecodeError::NotAnObject("number"))
        ));
        let err = DevicePatch::from_json(b"\"d1\"").unwrap_err();
        assert_eq!(err.to_string(), "cannot decode a JSON string into a device");
    }

    #[test]
    fn should_reject_non_string_field() {
        let err = DevicePatch::from_json(br#"{"status":1}"#).unwrap_err();
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn should_match_field_names_case_insensitively() {
        let patch = DevicePatch::from_json(br#"{"ID":"d1","Name":"A","STATUS":"on"}"#).unwrap();
        assert_eq!(
            Device::from_patch(patch),
            Device::builder().id("d1").name("A").status("on").build()
        );
    }

    #[test]
    fn should_fold_long_s_onto_status() {
        let patch = DevicePatch::from_json("{\"\u{17f}tatus\":\"off\"}".as_bytes()).unwrap();
        assert_eq!(patch.status.as_deref(), Some("off"));
    }

    #[test]
    fn should_let_later_key_win_when_spellings_collide() {
        let patch = DevicePatch::from_json(br#"{"id":"lower","ID":"upper"}"#).unwrap();
        assert_eq!(patch.id.as_deref(), Some("upper"));

        let patch = DevicePatch::from_json(br#"{"ID":"upper","id":"lower"}"#).unwrap();
        assert_eq!(patch.id.as_deref(), Some("lower"));
    }

    #[test]
    fn should_keep_earlier_value_when_later_duplicate_is_null() {
        let patch = DevicePatch::from_json(br#"{"name":"A","Name":null}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("A"));
    }

    #[test]
    fn should_not_match_keys_that_only_share_a_prefix() {
        let patch = DevicePatch::from_json(br#"{"ids":"x","nam":"y"}"#).unwrap();
        assert_eq!(patch, DevicePatch::default());
    }

    #[test]
    fn should_replace_invalid_utf8_with_replacement_character() {
        let patch = DevicePatch::from_json(b"{\"id\":\"d\xff1\"}").unwrap();
        assert_eq!(patch.id.as_deref(), Some("d\u{fffd}1"));
    }

    #[test]
    fn should_serialize_every_field() {
        let json = serde_json::to_value(Device::builder().id("d1").build()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "d1", "name": "", "description": "", "status": ""})
        );
    }
}
