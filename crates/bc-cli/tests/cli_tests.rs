// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bc_cli::{Cli, Commands, Parser};
use bc_logging::{CliLogLevel, LogFormat};
use serial_test::serial;
use std::path::PathBuf;

const STACK_VARS: [&str; 3] = ["BRAINCTL_FILE", "BRAINCTL_STACK_DIR", "BRAINCTL_OVERRIDES"];

fn clear_stack_env() {
    for var in STACK_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_stack_defaults() {
    clear_stack_env();
    let cli = Cli::try_parse_from(["brainctl", "validate"]).unwrap();

    assert!(matches!(cli.command, Commands::Validate));
    assert_eq!(cli.stack.file, PathBuf::from("app.yaml"));
    assert_eq!(cli.stack.stack_dir, PathBuf::from("."));
    assert_eq!(cli.stack.overrides, "overrides.yaml");
    assert_eq!(cli.logging.log_level, None);
}

#[test]
#[serial]
fn test_global_flags_after_subcommand() {
    clear_stack_env();
    let cli = Cli::try_parse_from([
        "brainctl",
        "show",
        "--json",
        "-f",
        "prod.yaml",
        "--stack-dir",
        "stacks/billing",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Show(args) => assert!(args.json),
        _ => panic!("expected show"),
    }
    assert_eq!(cli.stack.file, PathBuf::from("prod.yaml"));
    assert_eq!(
        cli.stack.to_runtime_options().app_path(),
        PathBuf::from("stacks/billing/prod.yaml")
    );
    assert_eq!(cli.logging.log_level, Some(CliLogLevel::Debug));
    assert_eq!(cli.logging.log_format, Some(LogFormat::Json));
}

#[test]
#[serial]
fn test_stack_flags_from_environment() {
    clear_stack_env();
    std::env::set_var("BRAINCTL_STACK_DIR", "/srv/stacks/web");
    std::env::set_var("BRAINCTL_OVERRIDES", "extra/ingress.yaml");
    let parsed = Cli::try_parse_from(["brainctl", "status"]);
    clear_stack_env();

    let options = parsed.unwrap().stack.to_runtime_options();
    assert_eq!(options.stack_dir, PathBuf::from("/srv/stacks/web"));
    assert_eq!(
        options.overrides_path(),
        Some(PathBuf::from("/srv/stacks/web/extra/ingress.yaml"))
    );
}

#[test]
#[serial]
fn test_empty_overrides_flag() {
    clear_stack_env();
    let cli = Cli::try_parse_from(["brainctl", "validate", "--overrides", ""]).unwrap();
    assert_eq!(cli.stack.to_runtime_options().overrides, None);
}

#[test]
fn test_guard_requires_plan() {
    assert!(Cli::try_parse_from(["brainctl", "guard"]).is_err());

    let cli = Cli::try_parse_from([
        "brainctl",
        "guard",
        "--plan",
        "plan.json",
        "--force-instance-modify",
    ])
    .unwrap();
    match cli.command {
        Commands::Guard(args) => {
            assert_eq!(args.plan, PathBuf::from("plan.json"));
            assert!(args.force_instance_modify);
        }
        _ => panic!("expected guard"),
    }
}

#[test]
fn test_unknown_subcommand() {
    assert!(Cli::try_parse_from(["brainctl", "apply"]).is_err());
}
