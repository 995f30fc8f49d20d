//! Reverse-delta computation: given an old and a new field state, produce
//! the minimal set of operations that turns the new state back into the
//! old one.

use chronicle_types::{Field, FieldSlice, Magic};

/// Compute the reverse delta between two field states.
///
/// `None` for `old` marks the creation case and yields the single
/// synthetic creation-marker field. Otherwise the delta is, in order:
/// fields dropped by the update (with their pre-change values), fields
/// whose value changed (with their pre-change values), and fields
/// introduced by the update (as [`Magic::FieldRemoved`] markers, telling
/// rollback to delete them again). An empty result means the states are
/// identical.
pub fn reverse_delta(old: Option<&FieldSlice>, new: &FieldSlice) -> FieldSlice {
    let Some(old) = old else {
        return FieldSlice::from(vec![Field::creation_marker()]);
    };

    let mut delta = FieldSlice::new();

    for field in old {
        if !new.contains(&field.name) {
            delta.push(field.clone());
        }
    }

    for field in new {
        if let Some(old_field) = old.get(&field.name) {
            if old_field.value != field.value {
                delta.push(old_field.clone());
            }
        }
    }

    for field in new {
        if !old.contains(&field.name) {
            delta.push(Field::new(field.name.clone(), Magic::FieldRemoved));
        }
    }

    delta
}
