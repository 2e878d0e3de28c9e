use std::collections::BTreeSet;

use tracing::debug;

use super::result::{RedFlagAlert, UrgencyLevel};
use crate::knowledge::{RedFlagRule, Symptom};

pub(crate) fn triggered_alerts(
    red_flags: &[RedFlagRule],
    facts: &BTreeSet<Symptom>,
) -> Vec<RedFlagAlert> {
    red_flags
        .iter()
        .filter(|flag| {
            flag.required_symptoms
                .iter()
                .all(|symptom| facts.contains(symptom))
        })
        .map(|flag| {
            debug!(red_flag = %flag.name, "red flag triggered");
            RedFlagAlert {
                name: flag.name.clone(),
                message: flag.message.clone(),
            }
        })
        .collect()
}

pub(crate) fn urgency_for(alerts: &[RedFlagAlert]) -> UrgencyLevel {
    if alerts.is_empty() {
        UrgencyLevel::Routine
    } else {
        UrgencyLevel::Emergency
    }
}
