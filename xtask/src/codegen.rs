use crate::project_root;
use anyhow::{bail, Context, Result};
use opentelemetry_semconv_codegen::{CodegenConfig, Generator};

// Crates whose sources are generated from a registry snapshot, each with a
// `semconv-codegen.yaml` at its root.
const GENERATED_PACKAGES: &[&str] = &["opentelemetry-semantic-conventions"];

pub fn codegen() -> Result<()> {
    let root = project_root();
    let check = std::env::args().any(|arg| arg == "--check");

    let mut stale = Vec::new();
    for package in GENERATED_PACKAGES {
        let config_path = root.join(package).join("semconv-codegen.yaml");
        let config = CodegenConfig::from_yaml_file(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;
        let generator = Generator::new(config);

        if check {
            stale.extend(generator.check()?);
        } else {
            let report = generator.generate()?;
            println!(
                "{package}: {} metrics, {} file(s) written, {} unchanged",
                report.metrics,
                report.written.len(),
                report.unchanged.len()
            );
        }
    }

    if !stale.is_empty() {
        for path in &stale {
            eprintln!("out of date: {}", path.display());
        }
        bail!("generated files are out of date, run `cargo xtask codegen`");
    }
    Ok(())
}
