//! Plan modifiers adjust an attribute's planned value after Terraform diffs
//! the configuration against prior state.

use crate::types::{AttributePath, Diagnostics, Dynamic};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PlanModifyRequest {
    pub state: Dynamic,
    pub plan: Dynamic,
    pub config: Dynamic,
    pub attribute_path: AttributePath,
}

impl PlanModifyRequest {
    /// How the planned value relates to the value already in state
    pub fn change(&self) -> Change {
        if self.state.is_null() || self.state.is_unknown() {
            Change::Create
        } else if self.plan.is_unknown() {
            Change::Pending
        } else if same_value(&self.state, &self.plan) {
            Change::Unchanged
        } else {
            Change::Updated
        }
    }
}

/// Classification of a single attribute's transition during planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Nothing usable in prior state
    Create,
    /// Prior state is known but the plan defers to apply
    Pending,
    Unchanged,
    Updated,
}

#[derive(Debug, Clone)]
pub struct PlanModifyResponse {
    pub plan_value: Dynamic,
    pub requires_replace: bool,
    pub diagnostics: Diagnostics,
}

impl PlanModifyResponse {
    fn keep(plan_value: Dynamic) -> Self {
        Self {
            plan_value,
            requires_replace: false,
            diagnostics: Diagnostics::new(),
        }
    }

    fn replace(mut self, requires_replace: bool) -> Self {
        self.requires_replace = requires_replace;
        self
    }
}

/// Hook run against an attribute's planned value.
///
/// A modifier may substitute the planned value, flag the owning resource for
/// replacement, or report diagnostics.
pub trait PlanModifier: Send + Sync {
    fn description(&self) -> String;

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse;
}

/// Carries the stored value forward instead of planning "known after apply"
#[derive(Debug, Clone, Copy, Default)]
pub struct UseStateForUnknown;

impl PlanModifier for UseStateForUnknown {
    fn description(&self) -> String {
        "Keeps the value from state while the planned value is unknown.".to_string()
    }

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        match request.change() {
            Change::Pending => PlanModifyResponse::keep(request.state),
            _ => PlanModifyResponse::keep(request.plan),
        }
    }
}

/// Any change to a known value recreates the resource
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiresReplace;

impl PlanModifier for RequiresReplace {
    fn description(&self) -> String {
        "Changing this value destroys and recreates the resource.".to_string()
    }

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        let updated = request.change() == Change::Updated;
        PlanModifyResponse::keep(request.plan).replace(updated)
    }
}

/// Replacement decided by a caller-supplied predicate
pub struct RequiresReplaceIf<F> {
    predicate: F,
    reason: String,
}

impl<F> RequiresReplaceIf<F>
where
    F: Fn(&PlanModifyRequest) -> bool + Send + Sync,
{
    pub fn new(predicate: F, reason: impl Into<String>) -> Self {
        Self {
            predicate,
            reason: reason.into(),
        }
    }
}

impl<F> PlanModifier for RequiresReplaceIf<F>
where
    F: Fn(&PlanModifyRequest) -> bool + Send + Sync,
{
    fn description(&self) -> String {
        self.reason.clone()
    }

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        if !(self.predicate)(&request) {
            return PlanModifyResponse::keep(request.plan);
        }

        let mut response = PlanModifyResponse::keep(request.plan).replace(true);
        response.diagnostics.add_attribute_warning(
            &request.attribute_path,
            format!("Replacement forced by {}", request.attribute_path),
            &self.reason,
        );
        response
    }
}

pub fn use_state_for_unknown() -> Arc<dyn PlanModifier> {
    Arc::new(UseStateForUnknown)
}

pub fn requires_replace() -> Arc<dyn PlanModifier> {
    Arc::new(RequiresReplace)
}

pub fn requires_replace_if<F>(predicate: F, reason: impl Into<String>) -> Arc<dyn PlanModifier>
where
    F: Fn(&PlanModifyRequest) -> bool + Send + Sync + 'static,
{
    Arc::new(RequiresReplaceIf::new(predicate, reason))
}

/// Threads the plan through each modifier in turn. Stops at the first error.
pub fn apply_all(
    modifiers: &[Arc<dyn PlanModifier>],
    mut request: PlanModifyRequest,
) -> PlanModifyResponse {
    let mut combined = PlanModifyResponse::keep(Dynamic::Null);

    for modifier in modifiers {
        let step = modifier.modify_plan(request.clone());
        if step.requires_replace {
            tracing::debug!(
                path = %request.attribute_path,
                modifier = %modifier.description(),
                "attribute forces replacement"
            );
        }
        combined.requires_replace |= step.requires_replace;
        combined.diagnostics.extend(step.diagnostics);
        request.plan = step.plan_value;

        if combined.diagnostics.has_error() {
            break;
        }
    }

    combined.plan_value = request.plan;
    combined
}

// Numbers travel as f64, so 1 and 1.0 must compare equal at any depth
fn same_value(left: &Dynamic, right: &Dynamic) -> bool {
    match (left, right) {
        (Dynamic::Number(l), Dynamic::Number(r)) => (l - r).abs() < f64::EPSILON,
        (Dynamic::List(l), Dynamic::List(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| same_value(a, b))
        }
        (Dynamic::Map(l), Dynamic::Map(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, a)| r.get(key).is_some_and(|b| same_value(a, b)))
        }
        _ => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planning(state: impl Into<Dynamic>, plan: impl Into<Dynamic>) -> PlanModifyRequest {
        let plan = plan.into();
        PlanModifyRequest {
            state: state.into(),
            config: plan.clone(),
            plan,
            attribute_path: AttributePath::new("blob_store"),
        }
    }

    #[test]
    fn change_classifies_transitions() {
        assert_eq!(planning(Dynamic::Null, "default").change(), Change::Create);
        assert_eq!(planning("default", Dynamic::Unknown).change(), Change::Pending);
        assert_eq!(planning(8081_i64, 8081.0).change(), Change::Unchanged);
        assert_eq!(planning("default", "archive").change(), Change::Updated);
    }

    #[test]
    fn state_fills_pending_plan() {
        let response = UseStateForUnknown.modify_plan(planning("repo-42", Dynamic::Unknown));

        assert_eq!(response.plan_value, Dynamic::from("repo-42"));
        assert!(!response.requires_replace);
    }

    #[test]
    fn unknown_stays_unknown_on_create() {
        let response = UseStateForUnknown.modify_plan(planning(Dynamic::Null, Dynamic::Unknown));

        assert!(response.plan_value.is_unknown());
    }

    #[test]
    fn known_plan_wins_over_state() {
        let response = UseStateForUnknown.modify_plan(planning("old-name", "new-name"));

        assert_eq!(response.plan_value, Dynamic::from("new-name"));
    }

    #[test]
    fn only_updates_force_replacement() {
        let replaced = RequiresReplace.modify_plan(planning("maven2", "npm"));
        assert!(replaced.requires_replace);
        assert!(replaced.diagnostics.is_empty());

        for request in [
            planning("npm", "npm"),
            planning(Dynamic::Null, "npm"),
            planning("npm", Dynamic::Unknown),
        ] {
            assert!(!RequiresReplace.modify_plan(request).requires_replace);
        }
    }

    #[test]
    fn predicate_replacement_adds_warning() {
        let shrinking = requires_replace_if(
            |req| match (req.state.as_number(), req.plan.as_number()) {
                (Some(old), Some(new)) => new < old,
                _ => false,
            },
            "Disk size can only grow in place",
        );

        let response = shrinking.modify_plan(planning(20_i64, 10_i64));
        assert!(response.requires_replace);
        assert_eq!(response.diagnostics.warning_count(), 1);
        assert_eq!(response.diagnostics.warnings[0].detail, "Disk size can only grow in place");

        let response = shrinking.modify_plan(planning(20_i64, 40_i64));
        assert!(!response.requires_replace);
        assert!(response.diagnostics.is_empty());
    }

    #[test]
    fn chained_modifiers_see_previous_plan() {
        let modifiers = [use_state_for_unknown(), requires_replace()];

        let response = apply_all(&modifiers, planning("id-1", Dynamic::Unknown));

        assert_eq!(response.plan_value, Dynamic::from("id-1"));
        assert!(!response.requires_replace);
    }

    #[test]
    fn nested_numbers_compare_by_value() {
        let ports = Dynamic::List(vec![Dynamic::Number(80.0), Dynamic::from(443_i64)]);
        let same = Dynamic::List(vec![Dynamic::from(80_i64), Dynamic::Number(443.0)]);
        let other = Dynamic::List(vec![Dynamic::Number(8080.0), Dynamic::Number(443.0)]);

        assert!(same_value(&ports, &same));
        assert!(!same_value(&ports, &other));
        assert!(!same_value(&Dynamic::Bool(false), &Dynamic::from("false")));
    }
}
