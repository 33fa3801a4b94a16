//! Enum Resolver
//!
//! Validates aggregate-scoped enum declarations: values are unique, and every
//! transition state and the initial value are members of `values`.

use crate::domain::model::{EnumDescriptor, Transition};
use crate::error::{CompileError, CompileResult};
use crate::naming::pascal_case;
use crate::schema::RawEnum;

pub fn resolve_enum(raw: &RawEnum, aggregate: &str) -> CompileResult<EnumDescriptor> {
    let name = pascal_case(&raw.name);

    for (i, value) in raw.values.iter().enumerate() {
        if raw.values[..i].contains(value) {
            return Err(CompileError::DuplicateEnumValue {
                aggregate: aggregate.to_string(),
                enum_name: name,
                value: value.clone(),
            });
        }
    }

    let unknown = |state: &str| CompileError::UnknownTransitionState {
        aggregate: aggregate.to_string(),
        enum_name: name.clone(),
        state: state.to_string(),
    };

    let mut transitions = Vec::with_capacity(raw.transitions.len());
    for raw_transition in &raw.transitions {
        let from = raw_transition.from.states();
        if let Some(state) = from.iter().find(|s| !raw.values.contains(s)) {
            return Err(unknown(state));
        }
        if !raw.values.contains(&raw_transition.to) {
            return Err(unknown(&raw_transition.to));
        }
        transitions.push(Transition {
            from,
            to: raw_transition.to.clone(),
        });
    }

    if let Some(initial) = &raw.initial_value {
        if !raw.values.contains(initial) {
            return Err(CompileError::InvalidInitialValue {
                aggregate: aggregate.to_string(),
                enum_name: name,
                value: initial.clone(),
            });
        }
    }

    Ok(EnumDescriptor {
        name,
        values: raw.values.clone(),
        transitions,
        initial_value: raw.initial_value.clone(),
    })
}
