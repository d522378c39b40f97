use hardscore_domain::CheckRegistry;

/// Format the registry for `hardscore list`: one block per check, in registration order.
pub fn format_registry(registry: &CheckRegistry) -> String {
    let mut out = String::new();
    let width = registry
        .checks()
        .iter()
        .map(|c| c.id.len())
        .max()
        .unwrap_or(0);

    for check in registry.checks() {
        out.push_str(&format!(
            "{:<width$}  {:>3}  {}\n",
            check.id, check.weight, check.name
        ));
        out.push_str(&format!("{:<width$}       {}\n", "", check.probe));
    }

    out.push_str(&format!(
        "\n{} checks, total weight {}, max score {}\n",
        registry.len(),
        registry.total_weight(),
        registry.max_score()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_checks_in_order_with_probe() {
        let registry = CheckRegistry::builder(100)
            .file_exists("a.long_id", "first", 10, "/etc/a")
            .file_matches("b", "second", 5, "/etc/b", "^x")
            .build()
            .expect("valid");

        let text = format_registry(&registry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "a.long_id   10  first");
        assert_eq!(lines[1], "                file /etc/a exists");
        assert_eq!(lines[2], "b            5  second");
        assert_eq!(lines[3], "                file /etc/b matches /^x/");
        assert!(text.ends_with("2 checks, total weight 15, max score 100\n"));
    }

    #[test]
    fn lists_empty_registry() {
        let registry = CheckRegistry::builder(100).build().expect("valid");
        assert_eq!(
            format_registry(&registry),
            "\n0 checks, total weight 0, max score 100\n"
        );
    }
}
