use anyhow::Result;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = try_main() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let task = std::env::args().nth(1);
    match task.as_deref() {
        Some("codegen") => xtask::codegen::codegen(),
        _ => print_help(),
    }
}

fn print_help() -> Result<()> {
    eprintln!(
        "Tasks:
  - codegen [--check]   regenerate semantic convention constants
"
    );
    Ok(())
}
