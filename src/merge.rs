//! The section-mapping capability behind [`Document::merge`].
//!
//! Merging accepts any value that can *serialize* as a two-level map:
//! section names to parameter maps to scalar values. [`collect_sections`]
//! drives the source's [`Serialize`] impl against a purpose-built collector
//! serializer that records `(section, key, value)` data and rejects every
//! other shape with [`Error::MergeIncompatible`]. That makes merge work for
//! documents, nested map types, derived structs, and dynamic values such as
//! `serde_json::Value` objects, without any runtime type inspection beyond
//! serde's own dispatch.
//!
//! Scalar leaves are stringified, because the document model stores
//! strings: `8080` merges as `"8080"`, `true` as `"true"`.
//!
//! [`Document::merge`]: crate::Document::merge

use serde::ser::{Impossible, Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::error::{Error, Result};

type Sections = Vec<(String, Vec<(String, String)>)>;
type Pairs = Vec<(String, String)>;

/// Serializes `source` into section/key/value data, rejecting any shape
/// that is not a two-level map with scalar leaves.
pub(crate) fn collect_sections<S>(source: &S) -> Result<Sections>
where
    S: Serialize + ?Sized,
{
    source.serialize(DocumentCollector)
}

/// Top level: only maps and structs are document-shaped.
struct DocumentCollector;

impl Serializer for DocumentCollector {
    type Ok = Sections;
    type Error = Error;
    type SerializeSeq = Impossible<Sections, Error>;
    type SerializeTuple = Impossible<Sections, Error>;
    type SerializeTupleStruct = Impossible<Sections, Error>;
    type SerializeTupleVariant = Impossible<Sections, Error>;
    type SerializeMap = SectionListCollector;
    type SerializeStruct = SectionListCollector;
    type SerializeStructVariant = Impossible<Sections, Error>;

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SectionListCollector {
            sections: Vec::with_capacity(len.unwrap_or_default()),
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(SectionListCollector {
            sections: Vec::with_capacity(len),
            key: None,
        })
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Sections>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Sections>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<Sections> {
        Err(Error::merge_incompatible("a boolean"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Sections> {
        Err(Error::merge_incompatible("an integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Sections> {
        Err(Error::merge_incompatible("a float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Sections> {
        Err(Error::merge_incompatible("a float"))
    }

    fn serialize_char(self, _v: char) -> Result<Sections> {
        Err(Error::merge_incompatible("a character"))
    }

    fn serialize_str(self, _v: &str) -> Result<Sections> {
        Err(Error::merge_incompatible("a string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Sections> {
        Err(Error::merge_incompatible("raw bytes"))
    }

    fn serialize_none(self) -> Result<Sections> {
        Err(Error::merge_incompatible("a none value"))
    }

    fn serialize_unit(self) -> Result<Sections> {
        Err(Error::merge_incompatible("a unit value"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Sections> {
        Err(Error::merge_incompatible("a unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<Sections> {
        Err(Error::merge_incompatible("an enum variant"))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Sections>
    where
        T: Serialize + ?Sized,
    {
        Err(Error::merge_incompatible("an enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::merge_incompatible("a sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::merge_incompatible("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::merge_incompatible("a tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::merge_incompatible("an enum variant"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::merge_incompatible("an enum variant"))
    }
}

/// Collects the outer map: section names to parameter maps.
struct SectionListCollector {
    sections: Sections,
    key: Option<String>,
}

impl SerializeMap for SectionListCollector {
    type Ok = Sections;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.key = Some(key.serialize(ScalarCollector::section_name())?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let name = self
            .key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        let pairs = value.serialize(SectionCollector)?;
        self.sections.push((name, pairs));
        Ok(())
    }

    fn end(self) -> Result<Sections> {
        Ok(self.sections)
    }
}

impl SerializeStruct for SectionListCollector {
    type Ok = Sections;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let pairs = value.serialize(SectionCollector)?;
        self.sections.push((key.to_string(), pairs));
        Ok(())
    }

    fn end(self) -> Result<Sections> {
        Ok(self.sections)
    }
}

/// Second level: each section value must itself be a map or struct.
struct SectionCollector;

impl SectionCollector {
    fn reject(self) -> Error {
        Error::merge_incompatible("a section value that is not a parameter map")
    }
}

impl Serializer for SectionCollector {
    type Ok = Pairs;
    type Error = Error;
    type SerializeSeq = Impossible<Pairs, Error>;
    type SerializeTuple = Impossible<Pairs, Error>;
    type SerializeTupleStruct = Impossible<Pairs, Error>;
    type SerializeTupleVariant = Impossible<Pairs, Error>;
    type SerializeMap = PairListCollector;
    type SerializeStruct = PairListCollector;
    type SerializeStructVariant = Impossible<Pairs, Error>;

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(PairListCollector {
            pairs: Vec::with_capacity(len.unwrap_or_default()),
            key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(PairListCollector {
            pairs: Vec::with_capacity(len),
            key: None,
        })
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Pairs>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Pairs>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_i8(self, _v: i8) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_i16(self, _v: i16) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_i32(self, _v: i32) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_i64(self, _v: i64) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_u8(self, _v: u8) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_u16(self, _v: u16) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_u32(self, _v: u32) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_u64(self, _v: u64) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_f32(self, _v: f32) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_f64(self, _v: f64) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_char(self, _v: char) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_str(self, _v: &str) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_none(self) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_unit(self) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<Pairs> {
        Err(self.reject())
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Pairs>
    where
        T: Serialize + ?Sized,
    {
        Err(self.reject())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(self.reject())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(self.reject())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.reject())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.reject())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.reject())
    }
}

/// Collects the inner map: parameter names to stringified scalar values.
struct PairListCollector {
    pairs: Pairs,
    key: Option<String>,
}

impl SerializeMap for PairListCollector {
    type Ok = Pairs;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.key = Some(key.serialize(ScalarCollector::key())?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        let value = value.serialize(ScalarCollector::value())?;
        self.pairs.push((key, value));
        Ok(())
    }

    fn end(self) -> Result<Pairs> {
        Ok(self.pairs)
    }
}

impl SerializeStruct for PairListCollector {
    type Ok = Pairs;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let value = value.serialize(ScalarCollector::value())?;
        self.pairs.push((key.to_string(), value));
        Ok(())
    }

    fn end(self) -> Result<Pairs> {
        Ok(self.pairs)
    }
}

/// Leaf level: strings, characters, numbers, and booleans stringify;
/// anything structured is rejected.
struct ScalarCollector {
    context: &'static str,
}

impl ScalarCollector {
    fn section_name() -> Self {
        ScalarCollector {
            context: "a section name that is not string-like",
        }
    }

    fn key() -> Self {
        ScalarCollector {
            context: "a parameter name that is not string-like",
        }
    }

    fn value() -> Self {
        ScalarCollector {
            context: "a parameter value that is not a scalar",
        }
    }

    fn reject(self) -> Error {
        Error::merge_incompatible(self.context)
    }
}

impl Serializer for ScalarCollector {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(self.reject())
    }

    fn serialize_none(self) -> Result<String> {
        Err(self.reject())
    }

    fn serialize_unit(self) -> Result<String> {
        Err(self.reject())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(self.reject())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<String> {
        Err(self.reject())
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        Err(self.reject())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(self.reject())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(self.reject())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.reject())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.reject())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(self.reject())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(self.reject())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.reject())
    }
}
