//! Developer tasks (schema generation, contract fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        let parent = manifest_dir.parent().context("xtask has no parent")?;
        Ok(parent.to_path_buf())
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn contracts_fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("contracts").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(hardscore_types::ScoreReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(hardscore_settings::HardscoreConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "hardscore.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "hardscore.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        // Compared as JSON values: key order depends on serde_json's `preserve_order` feature.
        let expected = serde_json::to_value((spec.generate)())
            .with_context(|| format!("Failed to convert {} to JSON", spec.filename))?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let actual: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Checks the schema cannot express: the score must equal the sum of passed weights.
fn report_invariants(filename: &str, value: &serde_json::Value, errors: &mut Vec<String>) {
    let Ok(report) = serde_json::from_value::<hardscore_types::ScoreReport>(value.clone()) else {
        // Shape errors are already reported by schema validation.
        return;
    };

    let passed: u64 = report
        .checks
        .iter()
        .filter(|c| c.passed)
        .map(|c| u64::from(c.weight))
        .sum();
    if passed != u64::from(report.score) {
        errors.push(format!(
            "{}: score {} does not equal the sum of passed weights {}",
            filename, report.score, passed
        ));
    }

    for (i, check) in report.checks.iter().enumerate() {
        if check.name.is_empty() {
            errors.push(format!("{}: checks[{}].msg is empty", filename, i));
        }
    }
}

fn json_fixtures(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).context("Failed to read contracts/fixtures/")? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Validate contract fixtures against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;
    println!("✓ hardscore.report.v1 schema compiles");

    let fixtures_dir = contracts_fixtures_dir()?;
    if !fixtures_dir.exists() {
        bail!(
            "contracts/fixtures/ not found at {}\n\n\
            Create contract fixtures first.",
            fixtures_dir.display()
        );
    }

    let fixtures = json_fixtures(&fixtures_dir)?;
    if fixtures.is_empty() {
        bail!("No JSON fixtures found in {}", fixtures_dir.display());
    }

    let mut errors = Vec::new();
    for path in &fixtures {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", filename))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", filename))?;

        let before = errors.len();
        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", filename, err));
        }
        report_invariants(&filename, &value, &mut errors);

        if errors.len() == before {
            println!("  ✓ {} validates", filename);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} contract fixtures pass conformance checks!",
        fixtures.len()
    );
    Ok(())
}

/// Validate that every baseline check has an explanation, and that the baseline and the
/// id list agree.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = hardscore_types::explain::all_check_ids();
    let registry = hardscore_domain::baseline().context("build baseline registry")?;

    let mut errors = Vec::new();

    for check_id in check_ids {
        match hardscore_types::explain::lookup_explanation(check_id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Check ID '{}' has empty title", check_id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Check ID '{}' has empty description", check_id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Check ID '{}' has empty remediation", check_id));
                }
            }
            None => {
                errors.push(format!("Check ID '{}' has no explanation", check_id));
            }
        }
    }

    let registered: Vec<&str> = registry.checks().iter().map(|c| c.id.as_str()).collect();
    if registered != check_ids {
        errors.push(format!(
            "baseline registers {:?} but the id list is {:?}",
            registered, check_ids
        ));
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate contracts/fixtures/*.json against the report schema");
    eprintln!("  explain-coverage  Validate all check IDs have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", hardscore_types::SCHEMA_REPORT_V1);
            println!("{}", hardscore_types::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
