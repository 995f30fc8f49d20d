//! Shared fixtures for the engine tests: deterministic signatures and a
//! few representative [`AuditableObject`] implementations.

use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};

use chronicle_types::{Auditor, Field, FieldSlice, Signature, Timestamp, Value};

use crate::error::ObjectError;
use crate::object::{AuditableObject, ObjectState};

/// Deterministic generator of strictly increasing signatures.
pub(crate) struct SignatureSequence {
    auditor: Auditor,
    counter: i64,
}

impl SignatureSequence {
    pub(crate) fn new() -> Self {
        Self {
            auditor: Auditor::new("test", "suite"),
            counter: 0,
        }
    }

    pub(crate) fn next(&mut self) -> Signature {
        self.counter += 1;
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(self.counter)
            + Duration::minutes(self.counter);
        Signature::new(self.auditor.clone(), t)
    }
}

/// Shift a nonzero timestamp by whole seconds.
pub(crate) fn shift(t: Timestamp, seconds: i64) -> Timestamp {
    Timestamp::from(t.as_datetime().expect("nonzero timestamp") + Duration::seconds(seconds))
}

fn split(state: ObjectState) -> (FieldSlice, Option<Timestamp>) {
    match state {
        ObjectState::Live(fields) => (fields, None),
        ObjectState::RolledBack { fields, at } => (fields, Some(at)),
    }
}

/// An object with one field per scalar shape, plus a field the engine
/// never sees — restoring state must not disturb it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BasicObject {
    pub str_value: String,
    pub bool_value: bool,
    pub i32_value: i32,
    pub i64_value: i64,
    pub f64_value: f64,
    pub static_value: String,
    pub rolled_back: Option<Timestamp>,
}

impl BasicObject {
    pub(crate) fn sample() -> Self {
        Self {
            str_value: "1".into(),
            bool_value: true,
            i32_value: 1,
            i64_value: 100,
            f64_value: 1.0,
            static_value: "should not change".into(),
            rolled_back: None,
        }
    }

    pub(crate) fn rolled_back_to(mut self, t: Timestamp) -> Self {
        self.rolled_back = Some(t);
        self
    }
}

impl AuditableObject for BasicObject {
    fn get_fields(&self) -> Result<ObjectState, ObjectError> {
        let fields = FieldSlice::from(vec![
            Field::new("Str", self.str_value.clone()),
            Field::new("Bool", self.bool_value),
            Field::new("Int", self.i32_value),
            Field::new("Int64", self.i64_value),
            Field::new("Float64", self.f64_value),
        ]);
        Ok(match self.rolled_back {
            None => ObjectState::Live(fields),
            Some(at) => ObjectState::RolledBack { fields, at },
        })
    }

    fn set_fields(&mut self, state: ObjectState) -> Result<(), ObjectError> {
        let (fields, rolled_back) = split(state);
        for field in &fields {
            match (field.name.as_str(), &field.value) {
                ("Str", Value::Str(v)) => self.str_value = v.clone(),
                ("Bool", Value::Bool(v)) => self.bool_value = *v,
                ("Int", Value::I32(v)) => self.i32_value = *v,
                ("Int64", Value::I64(v)) => self.i64_value = *v,
                ("Float64", Value::F64(v)) => self.f64_value = *v,
                _ => panic!("invalid field: {field}"),
            }
        }
        self.rolled_back = rolled_back;
        Ok(())
    }
}

/// An object with one field per sequence shape.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SliceObject {
    pub strs: Vec<String>,
    pub bools: Vec<bool>,
    pub ints: Vec<i32>,
    pub int64s: Vec<i64>,
    pub float64s: Vec<f64>,
    pub static_value: String,
    pub rolled_back: Option<Timestamp>,
}

impl SliceObject {
    pub(crate) fn sample() -> Self {
        Self {
            strs: vec!["1".into()],
            bools: vec![true],
            ints: vec![1],
            int64s: vec![100],
            float64s: vec![1.0],
            static_value: "should not change".into(),
            rolled_back: None,
        }
    }

    pub(crate) fn rolled_back_to(mut self, t: Timestamp) -> Self {
        self.rolled_back = Some(t);
        self
    }
}

impl AuditableObject for SliceObject {
    fn get_fields(&self) -> Result<ObjectState, ObjectError> {
        let fields = FieldSlice::from(vec![
            Field::new("Strs", self.strs.clone()),
            Field::new("Bools", self.bools.clone()),
            Field::new("Ints", self.ints.clone()),
            Field::new("Int64s", self.int64s.clone()),
            Field::new("Float64s", self.float64s.clone()),
        ]);
        Ok(match self.rolled_back {
            None => ObjectState::Live(fields),
            Some(at) => ObjectState::RolledBack { fields, at },
        })
    }

    fn set_fields(&mut self, state: ObjectState) -> Result<(), ObjectError> {
        let (fields, rolled_back) = split(state);
        for field in &fields {
            match (field.name.as_str(), &field.value) {
                ("Strs", Value::StrSeq(v)) => self.strs = v.clone(),
                ("Bools", Value::BoolSeq(v)) => self.bools = v.clone(),
                ("Ints", Value::I32Seq(v)) => self.ints = v.clone(),
                ("Int64s", Value::I64Seq(v)) => self.int64s = v.clone(),
                ("Float64s", Value::F64Seq(v)) => self.float64s = v.clone(),
                _ => panic!("invalid field: {field}"),
            }
        }
        self.rolled_back = rolled_back;
        Ok(())
    }
}

/// A map-backed object whose field set changes between audits.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DynamicObject {
    pub values: BTreeMap<String, Value>,
    pub rolled_back: Option<Timestamp>,
}

impl DynamicObject {
    pub(crate) fn from_pairs(pairs: Vec<(&str, Value)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
            rolled_back: None,
        }
    }

    pub(crate) fn rolled_back_to(mut self, t: Timestamp) -> Self {
        self.rolled_back = Some(t);
        self
    }
}

impl AuditableObject for DynamicObject {
    fn get_fields(&self) -> Result<ObjectState, ObjectError> {
        let fields: FieldSlice = self
            .values
            .iter()
            .map(|(name, value)| Field::new(name.clone(), value.clone()))
            .collect();
        Ok(match self.rolled_back {
            None => ObjectState::Live(fields),
            Some(at) => ObjectState::RolledBack { fields, at },
        })
    }

    fn set_fields(&mut self, state: ObjectState) -> Result<(), ObjectError> {
        let (fields, rolled_back) = split(state);
        self.values = fields
            .into_iter()
            .map(|field| (field.name, field.value))
            .collect();
        self.rolled_back = rolled_back;
        Ok(())
    }
}

/// An object whose accessors always fail, for error propagation tests.
pub(crate) struct FailingObject;

impl AuditableObject for FailingObject {
    fn get_fields(&self) -> Result<ObjectState, ObjectError> {
        Err("boom".into())
    }

    fn set_fields(&mut self, _state: ObjectState) -> Result<(), ObjectError> {
        Err("boom".into())
    }
}
