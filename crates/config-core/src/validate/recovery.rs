// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::{default_num, default_str, ensure};
use crate::error::ValidationError;
use bc_config_types::{AppConfig, DbMode};

pub const DEFAULT_SNAPSHOT_TIME: &str = "03:00";
pub const DEFAULT_DRILL_SCHEDULE: &str = "cron(0 3 1 * ? *)";

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let recovery = &mut config.recovery;
    default_str(&mut recovery.snapshot_time_utc, DEFAULT_SNAPSHOT_TIME);
    check_snapshot_time(&recovery.snapshot_time_utc)?;

    let retention = default_num(&mut recovery.retention_days, 7);
    ensure(
        (1..=365).contains(&retention),
        "recovery.retention_days",
        "recovery.retention_days must be between 1 and 365",
    )?;

    recovery.backup_app.default_to(true);
    recovery.backup_db.default_to(true);
    recovery.enable_runbooks.default_to(true);
    default_str(&mut recovery.drill.schedule_expression, DEFAULT_DRILL_SCHEDULE);
    recovery.drill.register_to_target_group.default_to(false);

    if recovery.enabled && recovery.backup_db.is_on() {
        ensure(
            config.db.enabled,
            "recovery.backup_db",
            "recovery.backup_db=true requires db.enabled=true",
        )?;
        ensure(
            config.db.db_mode() == Some(DbMode::Ec2),
            "recovery.backup_db",
            "recovery.backup_db=true requires db.mode=ec2",
        )?;
    }

    let recovery = &config.recovery;
    if !recovery.drill.enabled {
        return Ok(());
    }
    let requirements = [
        (recovery.enabled, "recovery.enabled=true"),
        (recovery.enable_runbooks.is_on(), "recovery.enable_runbooks=true"),
        (recovery.backup_app.is_on(), "recovery.backup_app=true"),
        (config.observability.enabled.is_on(), "observability.enabled=true"),
    ];
    for (met, requirement) in requirements {
        if !met {
            return Err(ValidationError::new(
                "recovery.drill.enabled",
                format!("recovery.drill.enabled=true requires {requirement}"),
            ));
        }
    }
    ensure(
        !recovery.drill.schedule_expression.is_empty(),
        "recovery.drill.schedule_expression",
        "recovery.drill.schedule_expression is required when recovery.drill.enabled=true",
    )?;
    ensure(
        !recovery.drill.register_to_target_group.is_on() || config.lb.enabled,
        "recovery.drill.register_to_target_group",
        "recovery.drill.register_to_target_group=true requires lb.enabled=true",
    )
}

/// `HH:MM`, 24h clock
fn check_snapshot_time(value: &str) -> Result<(), ValidationError> {
    const FIELD: &str = "recovery.snapshot_time_utc";

    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return Err(ValidationError::new(
            FIELD,
            "recovery.snapshot_time_utc must be in HH:MM format",
        ));
    }
    let hour = parse_two_digits(value.get(0..2)).ok_or_else(|| {
        ValidationError::new(FIELD, "recovery.snapshot_time_utc must contain numeric hour")
    })?;
    let minute = parse_two_digits(value.get(3..5)).ok_or_else(|| {
        ValidationError::new(FIELD, "recovery.snapshot_time_utc must contain numeric minute")
    })?;
    ensure(
        hour <= 23 && minute <= 59,
        FIELD,
        "recovery.snapshot_time_utc must be a valid 24h time",
    )
}

fn parse_two_digits(part: Option<&str>) -> Option<u8> {
    part.filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse().ok())
}
