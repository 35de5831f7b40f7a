// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bc_guardrail::{
    ApprovalSource, Console, EnvSignalProvider, Guardrail, GuardrailError,
    InteractivePromptProvider, Outcome,
};
use std::collections::VecDeque;
use std::io;

/// Console that replays canned answers
struct ScriptedConsole {
    interactive: bool,
    answers: VecDeque<String>,
}

impl ScriptedConsole {
    fn new(interactive: bool, answers: &[&str]) -> Self {
        Self {
            interactive,
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Console for ScriptedConsole {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_line(&mut self) -> io::Result<String> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

fn guardrail(env: Option<&str>, console: ScriptedConsole) -> Guardrail {
    Guardrail::new(vec![
        Box::new(EnvSignalProvider::new(env.map(str::to_string))),
        Box::new(InteractivePromptProvider::new(console)),
    ])
}

const INSTANCE_AND_NETWORK_PLAN: &str = r#"{
  "format_version": "1.2",
  "resource_changes": [
    {"address": "aws_security_group.app_sg", "type": "aws_security_group", "change": {"actions": ["update"]}},
    {"address": "aws_instance.app[0]", "type": "aws_instance", "change": {"actions": ["delete", "create"]}},
    {"address": "aws_lb_listener.http", "type": "aws_lb_listener", "change": {"actions": ["create"]}},
    {"address": "aws_db_instance.db[0]", "type": "aws_db_instance", "change": {"actions": ["no-op"]}}
  ]
}"#;

#[test]
fn test_instance_replacement_without_approval_is_blocked() {
    let mut out = Vec::new();
    let err = guardrail(None, ScriptedConsole::new(false, &[]))
        .check(INSTANCE_AND_NETWORK_PLAN.as_bytes(), &mut out)
        .unwrap_err();

    match err {
        GuardrailError::Blocked { resources } => {
            assert_eq!(resources, vec!["aws_instance.app[0]"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let listing = String::from_utf8(out).unwrap();
    assert!(listing.contains("aws_instance.app[0] (replace)"));
    assert!(!listing.contains("aws_security_group"));
}

#[test]
fn test_operator_confirms() {
    let mut out = Vec::new();
    let outcome = guardrail(None, ScriptedConsole::new(true, &["yes\n"]))
        .check(INSTANCE_AND_NETWORK_PLAN.as_bytes(), &mut out)
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Approved {
            resources: vec!["aws_instance.app[0]".to_string()],
            source: ApprovalSource::Operator,
        }
    );
    assert!(String::from_utf8(out).unwrap().ends_with("Type 'yes' to continue: "));
}

#[test]
fn test_operator_declines() {
    let outcome = guardrail(Some("no"), ScriptedConsole::new(true, &["n\n"]))
        .check(INSTANCE_AND_NETWORK_PLAN.as_bytes(), &mut io::sink())
        .unwrap();
    assert!(matches!(outcome, Outcome::Denied { .. }));
}

#[test]
fn test_env_signal_skips_prompt() {
    let outcome = guardrail(Some(" True "), ScriptedConsole::new(true, &["no\n"]))
        .check(INSTANCE_AND_NETWORK_PLAN.as_bytes(), &mut io::sink())
        .unwrap();
    assert!(matches!(
        outcome,
        Outcome::Approved {
            source: ApprovalSource::EnvSignal,
            ..
        }
    ));
}

#[test]
fn test_network_only_plan_is_clear() {
    let plan = r#"{"resource_changes": [
        {"address": "aws_security_group.app_sg", "type": "aws_security_group", "change": {"actions": ["delete", "create"]}}
    ]}"#;
    let outcome = guardrail(None, ScriptedConsole::new(false, &[]))
        .check(plan.as_bytes(), &mut io::sink())
        .unwrap();
    assert_eq!(outcome, Outcome::Clear);
}

#[test]
fn test_malformed_plan() {
    let err = guardrail(Some("yes"), ScriptedConsole::new(true, &["yes\n"]))
        .check(b"not json", &mut io::sink())
        .unwrap_err();
    assert!(matches!(err, GuardrailError::Plan(_)));
}
