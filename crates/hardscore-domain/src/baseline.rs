//! The built-in hardening baseline.
//!
//! Checks are textual: each one asks whether a pattern appears in a file or a command's
//! output, or whether a file exists. None of them parse the underlying config grammar.

use crate::model::CheckRegistry;
use crate::registry::RegistryError;
use hardscore_types::ids;

/// Score ceiling reported as `max`. Kept at 100 even though the baseline weights sum to 90.
pub const BASELINE_MAX_SCORE: u32 = 100;

const SSHD_CONFIG: &str = "/etc/ssh/sshd_config";
const PWQUALITY_CONF: &str = "/etc/security/pwquality.conf";
const SYSCTL_HARDENING_CONF: &str = "/etc/sysctl.d/99-hardening.conf";

pub fn baseline() -> Result<CheckRegistry, RegistryError> {
    CheckRegistry::builder(BASELINE_MAX_SCORE)
        // `ufw status` prints "Status: inactive" too, so a bare substring test for "active"
        // would pass a disabled firewall.
        .command_matches(
            ids::CHECK_FIREWALL_UFW_ACTIVE,
            "UFW is active",
            10,
            &["ufw", "status"],
            r"(?i)^status:\s*active\b",
        )
        .file_matches(
            ids::CHECK_SSH_PERMIT_ROOT_LOGIN,
            "PermitRootLogin no",
            10,
            SSHD_CONFIG,
            r"^PermitRootLogin\s+no",
        )
        .file_matches(
            ids::CHECK_SSH_PROTOCOL_2,
            "SSH Protocol 2",
            5,
            SSHD_CONFIG,
            r"^Protocol\s+2",
        )
        .file_matches(
            ids::CHECK_SSH_PASSWORD_AUTH_DISABLED,
            "PasswordAuthentication no",
            5,
            SSHD_CONFIG,
            r"^PasswordAuthentication\s+no",
        )
        .file_matches(
            ids::CHECK_AUTH_PWQUALITY_MINLEN,
            "pwquality minlen >= 12",
            10,
            PWQUALITY_CONF,
            r"^minlen\s*=\s*1[2-9]",
        )
        .file_exists(
            ids::CHECK_UPDATES_UNATTENDED_UPGRADES,
            "unattended-upgrades configured",
            10,
            "/etc/apt/apt.conf.d/20auto-upgrades",
        )
        .file_matches(
            ids::CHECK_KERNEL_ASLR,
            "ASLR enabled",
            10,
            SYSCTL_HARDENING_CONF,
            r"^kernel.randomize_va_space\s*=\s*2",
        )
        .file_matches(
            ids::CHECK_KERNEL_RP_FILTER,
            "rp_filter enabled",
            10,
            SYSCTL_HARDENING_CONF,
            r"^net.ipv4.conf.all.rp_filter\s*=\s*1",
        )
        .file_exists(
            ids::CHECK_AUDIT_AUDITD_RULES,
            "auditd rules present",
            10,
            "/etc/audit/rules.d/hardening.rules",
        )
        .file_exists(
            ids::CHECK_INTRUSION_FAIL2BAN_JAIL,
            "fail2ban jail present",
            10,
            "/etc/fail2ban/jail.local",
        )
        .build()
}
