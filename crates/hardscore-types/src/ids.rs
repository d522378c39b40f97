//! Stable identifiers for the baseline checks.
//!
//! `check_id` is a dotted namespace: `<area>.<expectation>`. IDs are used by
//! `hardscore.toml` overrides and `hardscore explain`; they never appear in the report.

pub const CHECK_FIREWALL_UFW_ACTIVE: &str = "firewall.ufw_active";
pub const CHECK_SSH_PERMIT_ROOT_LOGIN: &str = "ssh.permit_root_login";
pub const CHECK_SSH_PROTOCOL_2: &str = "ssh.protocol_2";
pub const CHECK_SSH_PASSWORD_AUTH_DISABLED: &str = "ssh.password_auth_disabled";
pub const CHECK_AUTH_PWQUALITY_MINLEN: &str = "auth.pwquality_minlen";
pub const CHECK_UPDATES_UNATTENDED_UPGRADES: &str = "updates.unattended_upgrades";
pub const CHECK_KERNEL_ASLR: &str = "kernel.aslr";
pub const CHECK_KERNEL_RP_FILTER: &str = "kernel.rp_filter";
pub const CHECK_AUDIT_AUDITD_RULES: &str = "audit.auditd_rules";
pub const CHECK_INTRUSION_FAIL2BAN_JAIL: &str = "intrusion.fail2ban_jail";

/// Baseline check IDs in registration order.
pub const BASELINE_CHECK_IDS: &[&str] = &[
    CHECK_FIREWALL_UFW_ACTIVE,
    CHECK_SSH_PERMIT_ROOT_LOGIN,
    CHECK_SSH_PROTOCOL_2,
    CHECK_SSH_PASSWORD_AUTH_DISABLED,
    CHECK_AUTH_PWQUALITY_MINLEN,
    CHECK_UPDATES_UNATTENDED_UPGRADES,
    CHECK_KERNEL_ASLR,
    CHECK_KERNEL_RP_FILTER,
    CHECK_AUDIT_AUDITD_RULES,
    CHECK_INTRUSION_FAIL2BAN_JAIL,
];
