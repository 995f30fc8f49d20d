//! Versioned binary codec for audit histories.
//!
//! Layout: a version byte, the interned field-name table (each distinct
//! name once, in first-occurrence order), then the entries — signature,
//! field count, and per field a name index plus a type-tagged value
//! payload. Reading enforces the version, the name indexes, and the closed
//! set of type tags.

use tracing::debug;

use chronicle_types::{Field, FieldSlice, Magic, Signature, Value};
use chronicle_wire::{ByteReader, ByteWriter};

use crate::error::{HistoryError, HistoryResult};
use crate::history::{AuditHistory, HistoryEntry};

/// Wire format version for serialized histories.
const HISTORY_VERSION: u8 = 1;

pub(crate) fn encode(history: &AuditHistory) -> HistoryResult<Vec<u8>> {
    let mut w = ByteWriter::new();
    w.write_u8(HISTORY_VERSION);

    // Intern field names in first-occurrence order; entries reference them
    // by index so repeated names cost one varint each.
    let mut names: Vec<&str> = Vec::new();
    for entry in history.entries() {
        for field in entry.fields() {
            if !names.contains(&field.name.as_str()) {
                names.push(&field.name);
            }
        }
    }
    w.write_len(names.len());
    for name in &names {
        w.write_str(name);
    }

    w.write_len(history.len());
    for entry in history.entries() {
        entry.signature().encode(&mut w)?;
        w.write_len(entry.fields().len());
        for field in entry.fields() {
            let index = names
                .iter()
                .position(|name| *name == field.name)
                .expect("field name interned above");
            w.write_len(index);
            encode_value(&mut w, &field.value);
        }
    }

    debug!(
        entries = history.len(),
        names = names.len(),
        bytes = w.len(),
        "encoded audit history"
    );
    Ok(w.into_bytes())
}

pub(crate) fn decode(bytes: &[u8]) -> HistoryResult<AuditHistory> {
    let mut r = ByteReader::new(bytes);

    let version = r.read_u8()?;
    if version != HISTORY_VERSION {
        return Err(HistoryError::InvalidVersion(version));
    }

    let name_count = r.read_len()?;
    let mut names = Vec::new();
    for _ in 0..name_count {
        names.push(r.read_str()?);
    }

    let entry_count = r.read_len()?;
    let mut entries = Vec::new();
    for _ in 0..entry_count {
        let signature = Signature::decode(&mut r)?;

        let field_count = r.read_len()?;
        let mut fields = FieldSlice::new();
        for _ in 0..field_count {
            let index = r.read_len()?;
            let name = names
                .get(index)
                .ok_or(HistoryError::NameIndexOutOfRange {
                    index,
                    count: names.len(),
                })?;
            let value = decode_value(&mut r)?;
            fields.push(Field::new(name.clone(), value));
        }
        entries.push(HistoryEntry::new(signature, fields));
    }

    Ok(AuditHistory::from_entries(entries))
}

fn encode_value(w: &mut ByteWriter, value: &Value) {
    w.write_u8(value.type_tag());
    match value {
        Value::Magic(magic) => w.write_u8(magic.as_byte()),
        Value::Str(v) => w.write_str(v),
        Value::Bool(v) => w.write_bool(*v),
        Value::I32(v) => w.write_i32(*v),
        Value::I64(v) => w.write_i64(*v),
        Value::F64(v) => w.write_f64(*v),
        Value::StrSeq(v) => w.write_str_seq(v),
        Value::BoolSeq(v) => w.write_bool_seq(v),
        Value::I32Seq(v) => w.write_i32_seq(v),
        Value::I64Seq(v) => w.write_i64_seq(v),
        Value::F64Seq(v) => w.write_f64_seq(v),
        Value::Bytes(v) => w.write_bytes(v),
    }
}

fn decode_value(r: &mut ByteReader<'_>) -> HistoryResult<Value> {
    let tag = r.read_u8()?;
    let value = match tag {
        0 => {
            let byte = r.read_u8()?;
            let magic = Magic::from_byte(byte).ok_or(HistoryError::InvalidMagicValue(byte))?;
            Value::Magic(magic)
        }
        1 => Value::Str(r.read_str()?),
        2 => Value::Bool(r.read_bool()?),
        3 => Value::I32(r.read_i32()?),
        4 => Value::I64(r.read_i64()?),
        5 => Value::F64(r.read_f64()?),
        6 => Value::StrSeq(r.read_str_seq()?),
        7 => Value::BoolSeq(r.read_bool_seq()?),
        8 => Value::I32Seq(r.read_i32_seq()?),
        9 => Value::I64Seq(r.read_i64_seq()?),
        10 => Value::F64Seq(r.read_f64_seq()?),
        11 => Value::Bytes(r.read_bytes()?),
        other => return Err(HistoryError::InvalidValueType(other)),
    };
    Ok(value)
}
