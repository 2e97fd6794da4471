//! Orchestration: resolve the input, discover pages, convert each one, and
//! merge the fragments into the output document.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sitebook_engine::{discover, merge, mirror, MirrorDir, PageConverter};

/// Run the full build for `input_source`, which is either a local directory
/// or an `http(s)://` URL to mirror first.
///
/// The temporary mirror directory is removed on every exit path unless
/// `keep_temp` is set; `MirrorDir` deletes it on drop.
pub fn build(input_source: &str, output: &Path, keep_temp: bool) -> Result<()> {
    let mut mirror_dir: Option<MirrorDir> = None;

    let input_dir: PathBuf = if is_url(input_source) {
        let mirrored = mirror(input_source).context("failed to mirror site")?;
        let root = mirrored.path().to_path_buf();
        mirror_dir = Some(mirrored);
        root
    } else {
        let path = PathBuf::from(input_source);
        if !path.exists() {
            bail!("input '{}' does not exist", path.display());
        }
        path
    };

    let result = run(&input_dir, output);

    if let Some(mirrored) = mirror_dir {
        if keep_temp {
            let kept = mirrored.keep();
            log::info!("Temporary files kept at {}", kept.display());
        } else {
            log::info!(
                "Cleaning up temporary files at {}",
                mirrored.path().display()
            );
        }
    }

    result
}

fn run(input_dir: &Path, output: &Path) -> Result<()> {
    log::info!("Scanning {} for HTML files...", input_dir.display());
    let files = discover(input_dir);
    if files.is_empty() {
        log::warn!("No HTML files found.");
        return Ok(());
    }
    log::info!("Found {} HTML files.", files.len());

    let converter = PageConverter::default();
    let bar = progress_bar(files.len() as u64);
    let mut fragments = Vec::with_capacity(files.len());
    for file in &files {
        fragments.push(converter.convert(file));
        bar.inc(1);
    }
    bar.finish_and_clear();

    log::info!(
        "Merging {} fragments into {}...",
        fragments.len(),
        output.display()
    );
    merge(&fragments, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Markdown created at {}", output.display());
    Ok(())
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}
