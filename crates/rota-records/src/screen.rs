//! The production compatibility screen: records plus facts, as
//! `rota-engine`'s injected `CompatibilityRules` capability.

use std::collections::BTreeSet;

use rota_engine::{CompatibilityRules, RejectionReason};

use crate::facts::FactBase;
use crate::store::Registry;

/// Screens a (surgeon, theatre, operation) triple against the loaded records
/// and, when present, the fact base.
///
/// Checks, in order: surgeon qualification (record `can_perform` list OR a
/// fact-base assertion), required equipment (operation record plus fact base,
/// every item must be in the theatre), theatre type versus the operation's
/// required specialty.
///
/// Identifiers are expected to be resolved before screening; an unknown id
/// yields no reasons here, since resolution errors belong to the store
/// boundary, not the decision.
pub struct RecordScreen<'a> {
    registry: &'a Registry,
    facts: Option<&'a FactBase>,
}

impl<'a> RecordScreen<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            facts: None,
        }
    }

    pub fn with_facts(registry: &'a Registry, facts: &'a FactBase) -> Self {
        Self {
            registry,
            facts: Some(facts),
        }
    }
}

impl CompatibilityRules for RecordScreen<'_> {
    fn screen(
        &self,
        surgeon_id: &str,
        theatre_id: &str,
        operation_id: &str,
    ) -> Vec<RejectionReason> {
        let (surgeon, theatre, operation) = match (
            self.registry.surgeon(surgeon_id),
            self.registry.theatre(theatre_id),
            self.registry.operation(operation_id),
        ) {
            (Ok(s), Ok(t), Ok(o)) => (s, t, o),
            _ => return Vec::new(),
        };

        let mut reasons = Vec::new();

        let qualified = surgeon.can_perform.iter().any(|op| op == operation_id)
            || self
                .facts
                .is_some_and(|f| f.surgeon_can_perform(surgeon_id, operation_id));
        if !qualified {
            reasons.push(RejectionReason::NotQualified);
        }

        let mut required: BTreeSet<String> =
            operation.required_equipment.iter().cloned().collect();
        if let Some(facts) = self.facts {
            required.extend(facts.required_equipment(operation_id));
        }
        let missing: Vec<String> = required
            .into_iter()
            .filter(|item| !theatre.equipment.contains(item))
            .collect();
        if !missing.is_empty() {
            reasons.push(RejectionReason::MissingEquipment(missing));
        }

        if theatre.kind != operation.required_specialty {
            reasons.push(RejectionReason::SpecialtyMismatch);
        }

        reasons
    }
}
