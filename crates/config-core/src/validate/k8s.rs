// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::{default_num, default_str, ensure};
use crate::error::ValidationError;
use bc_config_types::AppConfig;

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let k8s = &mut config.k8s;
    default_str(&mut k8s.control_plane_instance_type, "t3.medium");
    default_str(&mut k8s.worker_instance_type, "t3.medium");
    let workers = default_num(&mut k8s.worker_count, 2);
    ensure(workers >= 1, "k8s.worker_count", "k8s.worker_count must be >= 1")?;
    default_str(&mut k8s.kubernetes_version, "1.30");
    default_str(&mut k8s.pod_cidr, "10.244.0.0/16");
    default_str(&mut k8s.admin_cidr, "0.0.0.0/0");
    k8s.enable_ssm.default_to(true);
    k8s.enable_detailed_monitoring.default_to(false);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::fixtures::minimal;
    use bc_config_types::Toggle;

    #[test]
    fn test_defaults() {
        let mut config = minimal();
        check(&mut config).unwrap();
        assert_eq!(config.k8s.control_plane_instance_type, "t3.medium");
        assert_eq!(config.k8s.kubernetes_version, "1.30");
        assert_eq!(config.k8s.pod_cidr, "10.244.0.0/16");
        assert_eq!(config.k8s.enable_ssm, Toggle::On);
        assert_eq!(config.k8s.enable_detailed_monitoring, Toggle::Off);
    }

    #[test]
    fn test_explicit_zero_workers_rejected() {
        let mut config = minimal();
        config.k8s.worker_count = Some(0);
        let err = check(&mut config).unwrap_err();
        assert_eq!(err.to_string(), "k8s.worker_count must be >= 1");
    }

    #[test]
    fn test_explicit_ssm_off_is_kept() {
        let mut config = minimal();
        config.k8s.enable_ssm = Toggle::Off;
        check(&mut config).unwrap();
        assert_eq!(config.k8s.enable_ssm, Toggle::Off);
    }
}
