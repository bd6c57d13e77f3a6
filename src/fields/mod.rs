//! The LangGPT field record.
//!
//! `PromptFields` names every field the built-in template knows about. Scalar
//! fields are `Option<String>` so "not given" stays distinct from "given"; list
//! fields are plain vectors. The record is converted to an open [`Context`]
//! only at the renderer boundary.
//!
//! # Field File Format
//!
//! Field files are YAML (or JSON, by `.json` extension). Every key is
//! optional and unknown keys are ignored:
//!
//! ```text
//! role: Senior code reviewer
//! goals:
//!   - Find bugs
//!   - Suggest fixes
//! ```

use crate::cli::FieldArgs;
use crate::template::Context;
use serde::{Deserialize, Serialize};

mod io;

/// Scalar field names, in template order.
pub const SCALAR_FIELDS: [&str; 4] = ["role", "profile", "output_format", "style"];

/// List field names, in template order.
pub const LIST_FIELDS: [&str; 10] = [
    "goals",
    "constraints",
    "skills",
    "workflow",
    "examples",
    "memory",
    "tools",
    "safety",
    "evaluation",
    "rules",
];

/// Values for every LangGPT field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptFields {
    // =========================================================================
    // Scalar fields
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    // =========================================================================
    // List fields
    // =========================================================================
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workflow: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub memory: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evaluation: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl PromptFields {
    /// Build fields from command line flags.
    ///
    /// An empty scalar flag (`--role ""`) counts as not given.
    pub fn from_args(args: &FieldArgs) -> Self {
        Self {
            role: non_empty(&args.role),
            profile: non_empty(&args.profile),
            output_format: non_empty(&args.output_format),
            style: non_empty(&args.style),
            goals: args.goals.clone(),
            constraints: args.constraints.clone(),
            skills: args.skills.clone(),
            workflow: args.workflow.clone(),
            examples: args.examples.clone(),
            memory: args.memory.clone(),
            tools: args.tools.clone(),
            safety: args.safety.clone(),
            evaluation: args.evaluation.clone(),
            rules: args.rules.clone(),
        }
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.scalars().iter().all(|(_, v)| v.is_none_or(str::is_empty))
            && self.lists().iter().all(|(_, v)| v.is_empty())
    }

    /// Layer `other` on top of `self`: every field set in `other` wins.
    pub fn overlay(self, other: PromptFields) -> Self {
        combine(other, self)
    }

    /// Fill every field unset in `self` from `defaults`.
    pub fn merge_defaults(self, defaults: &PromptFields) -> Self {
        combine(self, defaults.clone())
    }

    /// Convert to a render context.
    ///
    /// Every known field is present: missing scalars become the empty string
    /// and missing lists become empty lists, so the built-in template never
    /// shows a raw placeholder for an omitted field.
    pub fn to_context(&self) -> Context {
        let mut ctx = Context::new();
        for (name, value) in self.scalars() {
            ctx.insert_text(name, value.unwrap_or_default());
        }
        for (name, items) in self.lists() {
            ctx.insert_list(name, items.iter().cloned());
        }
        ctx
    }

    fn scalars(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (SCALAR_FIELDS[0], self.role.as_deref()),
            (SCALAR_FIELDS[1], self.profile.as_deref()),
            (SCALAR_FIELDS[2], self.output_format.as_deref()),
            (SCALAR_FIELDS[3], self.style.as_deref()),
        ]
    }

    fn lists(&self) -> [(&'static str, &[String]); 10] {
        [
            (LIST_FIELDS[0], self.goals.as_slice()),
            (LIST_FIELDS[1], self.constraints.as_slice()),
            (LIST_FIELDS[2], self.skills.as_slice()),
            (LIST_FIELDS[3], self.workflow.as_slice()),
            (LIST_FIELDS[4], self.examples.as_slice()),
            (LIST_FIELDS[5], self.memory.as_slice()),
            (LIST_FIELDS[6], self.tools.as_slice()),
            (LIST_FIELDS[7], self.safety.as_slice()),
            (LIST_FIELDS[8], self.evaluation.as_slice()),
            (LIST_FIELDS[9], self.rules.as_slice()),
        ]
    }
}

/// Field-by-field merge: `primary` wins wherever it is set.
fn combine(primary: PromptFields, fallback: PromptFields) -> PromptFields {
    PromptFields {
        role: primary.role.or(fallback.role),
        profile: primary.profile.or(fallback.profile),
        output_format: primary.output_format.or(fallback.output_format),
        style: primary.style.or(fallback.style),
        goals: list_or(primary.goals, fallback.goals),
        constraints: list_or(primary.constraints, fallback.constraints),
        skills: list_or(primary.skills, fallback.skills),
        workflow: list_or(primary.workflow, fallback.workflow),
        examples: list_or(primary.examples, fallback.examples),
        memory: list_or(primary.memory, fallback.memory),
        tools: list_or(primary.tools, fallback.tools),
        safety: list_or(primary.safety, fallback.safety),
        evaluation: list_or(primary.evaluation, fallback.evaluation),
        rules: list_or(primary.rules, fallback.rules),
    }
}

fn list_or(primary: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if primary.is_empty() { fallback } else { primary }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
