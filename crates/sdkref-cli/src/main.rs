use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sdkref_core::config::{self, CONFIG_FILE_NAME, SdkrefConfig};
use sdkref_core::extract;
use sdkref_core::parse;
use sdkref_core::patch::{PatchOutcome, splice_section};
use sdkref_core::render;

#[derive(Parser)]
#[command(
    name = "sdkref",
    about = "Regenerate the SDK Reference section of the README from the OpenAPI spec",
    version
)]
struct Cli {
    /// Print the rendered section to stdout instead of updating the README
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = try_load_config()?.unwrap_or_default();

    let doc = load_spec(Path::new(&cfg.spec))?;
    let reference = extract::build_reference(&doc, &cfg.reference);
    log::debug!(
        "discovered {} resources across {} methods",
        reference.order.len(),
        reference.resources.values().map(Vec::len).sum::<usize>()
    );

    let fragment = render::render_reference(&reference);

    if cli.print {
        print!("{fragment}");
        return Ok(());
    }

    let readme_path = PathBuf::from(&cfg.readme);
    let content = fs::read_to_string(&readme_path)
        .with_context(|| format!("failed to read {}", readme_path.display()))?;

    match splice_section(&content, &fragment) {
        PatchOutcome::Updated(new_content) => {
            fs::write(&readme_path, new_content)
                .with_context(|| format!("failed to write {}", readme_path.display()))?;
            eprintln!("Updated {}", readme_path.display());
        }
        PatchOutcome::Unchanged => {
            eprintln!("No changes needed");
        }
    }

    Ok(())
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SdkrefConfig>> {
    config::load_config(Path::new(CONFIG_FILE_NAME)).map_err(|e| anyhow::anyhow!(e))
}

fn load_spec(path: &Path) -> Result<serde_yaml_ng::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    Ok(doc)
}
