//! Explain registry for baseline checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check inspects and why it exists.
    pub description: &'static str,
    /// How to bring a host into line.
    pub remediation: &'static str,
    /// Before/after configuration examples.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that fails the check.
    pub before: &'static str,
    /// Configuration that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_FIREWALL_UFW_ACTIVE => Some(explain_ufw_active()),
        ids::CHECK_SSH_PERMIT_ROOT_LOGIN => Some(explain_permit_root_login()),
        ids::CHECK_SSH_PROTOCOL_2 => Some(explain_protocol_2()),
        ids::CHECK_SSH_PASSWORD_AUTH_DISABLED => Some(explain_password_auth()),
        ids::CHECK_AUTH_PWQUALITY_MINLEN => Some(explain_pwquality_minlen()),
        ids::CHECK_UPDATES_UNATTENDED_UPGRADES => Some(explain_unattended_upgrades()),
        ids::CHECK_KERNEL_ASLR => Some(explain_aslr()),
        ids::CHECK_KERNEL_RP_FILTER => Some(explain_rp_filter()),
        ids::CHECK_AUDIT_AUDITD_RULES => Some(explain_auditd_rules()),
        ids::CHECK_INTRUSION_FAIL2BAN_JAIL => Some(explain_fail2ban_jail()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    ids::BASELINE_CHECK_IDS
}

fn explain_ufw_active() -> Explanation {
    Explanation {
        title: "UFW Is Active",
        description: "\
Runs `ufw status` and looks for a `Status: active` line.

A host without an active packet filter exposes every listening service to the network.
The check fails when ufw is not installed, when the command cannot be run (for example
without root), or when it does not finish within the command timeout.",
        remediation: "\
Define the allowed inbound services, then enable the firewall:
`ufw allow OpenSSH && ufw enable`.",
        examples: ExamplePair {
            before: "Status: inactive",
            after: "Status: active",
        },
    }
}

fn explain_permit_root_login() -> Explanation {
    Explanation {
        title: "SSH Root Login Disabled",
        description: "\
Looks for a `PermitRootLogin no` line at the start of a line in `/etc/ssh/sshd_config`.

Direct root logins remove the audit trail of which operator acted and make root the
single target of password guessing.",
        remediation: "\
Set `PermitRootLogin no` in `/etc/ssh/sshd_config` and reload sshd.
Operators should log in as themselves and escalate with sudo.",
        examples: ExamplePair {
            before: "PermitRootLogin yes",
            after: "PermitRootLogin no",
        },
    }
}

fn explain_protocol_2() -> Explanation {
    Explanation {
        title: "SSH Protocol 2",
        description: "\
Looks for an explicit `Protocol 2` line in `/etc/ssh/sshd_config`.

Protocol 1 is cryptographically broken. Modern OpenSSH only speaks protocol 2, but the
explicit directive documents intent on older or patched builds.",
        remediation: "Add `Protocol 2` to `/etc/ssh/sshd_config`.",
        examples: ExamplePair {
            before: "#Protocol 2,1",
            after: "Protocol 2",
        },
    }
}

fn explain_password_auth() -> Explanation {
    Explanation {
        title: "SSH Password Authentication Disabled",
        description: "\
Looks for `PasswordAuthentication no` in `/etc/ssh/sshd_config`.

Key-based authentication is not subject to online password guessing. This check carries a
lower weight because lab machines commonly keep passwords enabled.",
        remediation: "\
Distribute authorized keys first, then set `PasswordAuthentication no` and reload sshd.",
        examples: ExamplePair {
            before: "PasswordAuthentication yes",
            after: "PasswordAuthentication no",
        },
    }
}

fn explain_pwquality_minlen() -> Explanation {
    Explanation {
        title: "Password Minimum Length",
        description: "\
Looks for `minlen = 12` through `minlen = 19` in `/etc/security/pwquality.conf`.

Short local passwords fall quickly to offline cracking once a shadow file leaks.",
        remediation: "Set `minlen = 14` (or any value from 12 to 19) in `/etc/security/pwquality.conf`.",
        examples: ExamplePair {
            before: "# minlen = 8",
            after: "minlen = 14",
        },
    }
}

fn explain_unattended_upgrades() -> Explanation {
    Explanation {
        title: "Unattended Upgrades Configured",
        description: "\
Checks that `/etc/apt/apt.conf.d/20auto-upgrades` exists.

Security fixes that wait for a human to apply them leave known vulnerabilities open.
Only presence is checked, not the contents of the file.",
        remediation: "\
Install the `unattended-upgrades` package and run `dpkg-reconfigure -plow unattended-upgrades`.",
        examples: ExamplePair {
            before: "(file absent)",
            after: "\
APT::Periodic::Update-Package-Lists \"1\";
APT::Periodic::Unattended-Upgrade \"1\";",
        },
    }
}

fn explain_aslr() -> Explanation {
    Explanation {
        title: "ASLR Enabled",
        description: "\
Looks for `kernel.randomize_va_space = 2` in `/etc/sysctl.d/99-hardening.conf`.

Full address space layout randomization makes memory corruption exploits unreliable.
Only the persisted setting is inspected, not the live kernel value.",
        remediation: "\
Add `kernel.randomize_va_space = 2` to `/etc/sysctl.d/99-hardening.conf` and run `sysctl --system`.",
        examples: ExamplePair {
            before: "kernel.randomize_va_space = 0",
            after: "kernel.randomize_va_space = 2",
        },
    }
}

fn explain_rp_filter() -> Explanation {
    Explanation {
        title: "Reverse Path Filtering",
        description: "\
Looks for `net.ipv4.conf.all.rp_filter = 1` in `/etc/sysctl.d/99-hardening.conf`.

Strict reverse path filtering drops packets with spoofed source addresses.",
        remediation: "\
Add `net.ipv4.conf.all.rp_filter = 1` to `/etc/sysctl.d/99-hardening.conf` and run `sysctl --system`.",
        examples: ExamplePair {
            before: "net.ipv4.conf.all.rp_filter = 0",
            after: "net.ipv4.conf.all.rp_filter = 1",
        },
    }
}

fn explain_auditd_rules() -> Explanation {
    Explanation {
        title: "Audit Rules Present",
        description: "\
Checks that `/etc/audit/rules.d/hardening.rules` exists.

Without audit rules, changes to identity files and privileged commands leave no record.",
        remediation: "\
Install `auditd`, write the site rules to `/etc/audit/rules.d/hardening.rules` and run `augenrules --load`.",
        examples: ExamplePair {
            before: "(file absent)",
            after: "-w /etc/passwd -p wa -k identity",
        },
    }
}

fn explain_fail2ban_jail() -> Explanation {
    Explanation {
        title: "Fail2ban Jail Present",
        description: "\
Checks that `/etc/fail2ban/jail.local` exists.

Fail2ban bans sources that repeatedly fail authentication, slowing brute-force attempts.",
        remediation: "Install `fail2ban` and create `/etc/fail2ban/jail.local` enabling at least the sshd jail.",
        examples: ExamplePair {
            before: "(file absent)",
            after: "\
[sshd]
enabled = true",
        },
    }
}
