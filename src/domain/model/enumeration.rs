//! Enum descriptor
//!
//! Enums may carry a finite-state machine: transition edges plus an optional
//! initial value.

use serde::Serialize;

/// One transition edge. `from` lists every source state of the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from: Vec<String>,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDescriptor {
    pub name: String,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            transitions: Vec::new(),
            initial_value: None,
        }
    }

    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Allowed targets per state, in value order.
    ///
    /// States that never appear as a source are terminal and map to an empty
    /// list.
    pub fn transition_map(&self) -> TransitionMap {
        let mut entries: Vec<(String, Vec<String>)> =
            self.values.iter().map(|v| (v.clone(), Vec::new())).collect();

        for transition in &self.transitions {
            for from in &transition.from {
                let slot = match entries.iter().position(|(state, _)| state == from) {
                    Some(i) => i,
                    None => {
                        entries.push((from.clone(), Vec::new()));
                        entries.len() - 1
                    }
                };
                let targets = &mut entries[slot].1;
                if !targets.contains(&transition.to) {
                    targets.push(transition.to.clone());
                }
            }
        }

        TransitionMap { entries }
    }
}

/// Ordered adjacency map of a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl TransitionMap {
    /// Allowed targets from `state`, `None` if the state is unknown.
    pub fn allowed(&self, state: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, targets)| targets.as_slice())
    }

    pub fn is_terminal(&self, state: &str) -> bool {
        self.allowed(state).is_some_and(|targets| targets.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(state, targets)| (state.as_str(), targets.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TransitionMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}
