// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::compute::check_user_data_mode;
use super::{default_num, default_str, ensure};
use crate::error::ValidationError;
use bc_config_types::{AppConfig, DbMode, UserDataMode};

pub const EC2_DB_PORT: u16 = 1433;
pub const RDS_DB_PORT: u16 = 5432;

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let db = &mut config.db;
    check_user_data_mode(
        &mut db.user_data_mode,
        &db.user_data,
        ("db.user_data_mode", "db.user_data"),
    )?;

    default_str(&mut db.mode, DbMode::Ec2.as_str());
    let mode: DbMode = db
        .mode
        .parse()
        .map_err(|_| ValidationError::new("db.mode", "db.mode must be one of: ec2, rds"))?;

    match (db.enabled, mode) {
        (true, DbMode::Ec2) => {
            if db.instance_type.is_empty() {
                db.instance_type = config.ec2.instance_type.clone();
            }
            default_num(&mut db.port, EC2_DB_PORT);
        }
        (true, DbMode::Rds) => check_rds(config)?,
        (false, DbMode::Rds) => ensure(
            config.db.rds.password.trim().is_empty(),
            "db.rds.password",
            "db.rds.password must be omitted when db.enabled=false",
        )?,
        (false, DbMode::Ec2) => {}
    }
    Ok(())
}

fn check_rds(config: &mut AppConfig) -> Result<(), ValidationError> {
    ensure(
        config.infrastructure.subnet_ids.len() >= 2 || config.lb.subnet_ids.len() >= 2,
        "db.mode",
        "db.mode=rds requires at least 2 subnets in infrastructure.subnet_ids or lb.subnet_ids",
    )?;

    let db = &mut config.db;
    ensure(
        db.user_data_mode == UserDataMode::Default.as_str() && db.user_data.trim().is_empty(),
        "db.user_data",
        "db.user_data and db.user_data_mode are only supported when db.mode=ec2",
    )?;
    ensure(
        db.ami.is_empty() && db.os.is_empty() && db.instance_type.is_empty(),
        "db.instance_type",
        "db.instance_type/db.ami/db.os are only supported when db.mode=ec2",
    )?;

    let rds = &mut db.rds;
    default_str(&mut rds.instance_class, "db.t3.micro");
    default_str(&mut rds.engine, "postgres");
    default_str(&mut rds.engine_version, "16.3");
    default_num(&mut rds.allocated_storage, 20);
    default_str(&mut rds.storage_type, "gp3");
    default_str(&mut rds.db_name, "appdb");
    default_str(&mut rds.username, "brainctl");
    if rds.password.is_empty() {
        return Err(ValidationError::new(
            "db.rds.password",
            "db.rds.password is required when db.mode=rds",
        ));
    }
    default_num(&mut rds.backup_retention_days, 7);
    default_num(&mut db.port, RDS_DB_PORT);
    Ok(())
}
