use std::path::Path;

use anyhow::{bail, Result};

use navmenu::{check_entries, load_entries};

pub fn cmd_check(file: &Path, strict: bool, json: bool) -> Result<()> {
    let entries = load_entries(file)?;
    let report = check_entries(&entries);

    if json {
        let payload = serde_json::json!({
            "command": "check",
            "file": file,
            "strict": strict,
            "warnings": report.warnings(),
            "notes": report.notes(),
            "findings": report.findings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if report.is_clean() {
        println!("{}: no findings", file.display());
    } else {
        for finding in &report.findings {
            println!(
                "{}[{}]: {}",
                finding.severity, finding.check, finding.message
            );
        }
        println!(
            "{} warnings, {} notes",
            report.warnings(),
            report.notes()
        );
    }

    if strict && report.warnings() > 0 {
        bail!("check failed: {} warnings (strict mode)", report.warnings());
    }

    Ok(())
}
