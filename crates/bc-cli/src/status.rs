// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Human-readable summary of a resolved stack

use config_core::RuntimeConfig;
use std::io::{self, Write};

pub fn render(runtime: &RuntimeConfig, out: &mut impl Write) -> io::Result<()> {
    let cfg = &runtime.app;

    writeln!(out, "== brainctl status ==")?;
    writeln!(out, "App: {} ({})", cfg.app.name, cfg.app.environment)?;
    writeln!(out, "Workload: {}@{}", cfg.workload.kind, cfg.workload.version)?;
    writeln!(out, "Region: {}", cfg.app.region)?;
    writeln!(out, "Stack dir: {}", runtime.options.stack_dir.display())?;
    writeln!(out, "Workspace: {}", runtime.workspace_dir().display())?;

    let scaling = &cfg.app_scaling;
    if scaling.enabled {
        writeln!(
            out,
            "App scaling: enabled (min={} desired={} max={} cpu_target={:.1})",
            scaling.min_size.unwrap_or_default(),
            scaling.desired_capacity.unwrap_or_default(),
            scaling.max_size.unwrap_or_default(),
            scaling.cpu_target.unwrap_or_default(),
        )?;
    } else {
        writeln!(out, "App scaling: disabled")?;
    }

    let imds = if cfg.ec2.imds_v2_required { "required" } else { "optional" };
    writeln!(out, "IMDSv2: {imds}")?;

    if cfg.observability.enabled.is_on() {
        writeln!(
            out,
            "Observability: enabled (cpu_high_threshold={})",
            cfg.observability.cpu_high_threshold.unwrap_or_default()
        )?;
    } else {
        writeln!(out, "Observability: disabled")?;
    }

    let overrides = &cfg.runtime_overrides;
    if !overrides.is_empty() {
        writeln!(
            out,
            "Overrides: app_extra_ingress_rules={} db_extra_ingress_rules={} alb_extra_ingress_rules={}",
            overrides.app_extra_ingress.len(),
            overrides.db_extra_ingress.len(),
            overrides.alb_extra_ingress.len(),
        )?;
    }

    let recovery = &cfg.recovery;
    if recovery.enabled {
        writeln!(
            out,
            "Recovery: enabled (time_utc={} retention_days={} backup_app={} backup_db={} runbooks={})",
            recovery.snapshot_time_utc,
            recovery.retention_days.unwrap_or_default(),
            recovery.backup_app.is_on(),
            recovery.backup_db.is_on(),
            recovery.enable_runbooks.is_on(),
        )?;
    } else {
        writeln!(out, "Recovery: disabled")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_config_types::{AppConfig, IngressRule, Toggle};
    use config_core::RuntimeOptions;
    use std::path::PathBuf;

    fn runtime(app: AppConfig) -> RuntimeConfig {
        let options = RuntimeOptions::default();
        RuntimeConfig {
            app_path: options.app_path(),
            overrides_path: options.overrides_path(),
            options,
            app,
        }
    }

    fn rendered(app: AppConfig) -> String {
        let mut out = Vec::new();
        render(&runtime(app), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_minimal_summary() {
        let mut app = AppConfig::default();
        app.app.name = "billing".into();
        app.app.environment = "dev".into();
        app.app.region = "us-east-1".into();
        app.workload.kind = "ec2-app".into();
        app.workload.version = "v1".into();
        app.ec2.imds_v2_required = true;

        let text = rendered(app);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "== brainctl status ==",
                "App: billing (dev)",
                "Workload: ec2-app@v1",
                "Region: us-east-1",
                "Stack dir: .",
                &format!("Workspace: {}", PathBuf::from(".brainctl/apps/billing/dev").display()),
                "App scaling: disabled",
                "IMDSv2: required",
                "Observability: disabled",
                "Recovery: disabled",
            ]
        );
    }

    #[test]
    fn test_enabled_sections() {
        let mut app = AppConfig::default();
        app.app_scaling.enabled = true;
        app.app_scaling.min_size = Some(2);
        app.app_scaling.desired_capacity = Some(2);
        app.app_scaling.max_size = Some(4);
        app.app_scaling.cpu_target = Some(60.0);
        app.observability.enabled = Toggle::On;
        app.observability.cpu_high_threshold = Some(80);
        app.recovery.enabled = true;
        app.recovery.snapshot_time_utc = "03:00".into();
        app.recovery.retention_days = Some(7);
        app.recovery.backup_app = Toggle::On;
        app.recovery.backup_db = Toggle::Off;
        app.recovery.enable_runbooks = Toggle::On;
        app.runtime_overrides.app_extra_ingress.push(
            IngressRule::new("vpn", 443, 443, None, vec!["10.0.0.0/8".into()]).unwrap(),
        );

        let text = rendered(app);
        assert!(text.contains("App scaling: enabled (min=2 desired=2 max=4 cpu_target=60.0)\n"));
        assert!(text.contains("IMDSv2: optional\n"));
        assert!(text.contains("Observability: enabled (cpu_high_threshold=80)\n"));
        assert!(text.contains(
            "Overrides: app_extra_ingress_rules=1 db_extra_ingress_rules=0 alb_extra_ingress_rules=0\n"
        ));
        assert!(text.contains(
            "Recovery: enabled (time_utc=03:00 retention_days=7 backup_app=true backup_db=false runbooks=true)\n"
        ));
    }
}
