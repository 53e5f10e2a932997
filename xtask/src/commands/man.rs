use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

#[derive(Args, Debug)]
pub struct ManArgs {
    /// Output directory, relative to the workspace root
    #[arg(long = "out-dir", default_value = "dist/share/man/man1")]
    pub out_dir: PathBuf,
}

fn write_page(cmd: clap::Command, out_dir: &Path, file_stem: &str) -> Result<(), String> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .title(file_stem)
        .render(&mut buffer)
        .map_err(|e| format!("render {file_stem}.1: {e}"))?;

    let path = out_dir.join(format!("{file_stem}.1"));
    fs::write(&path, buffer).map_err(|e| format!("{}: {e}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn cmd_man(args: ManArgs) -> Result<(), String> {
    let out_dir = crate::prepare_out_dir(&args.out_dir)?;
    let cmd = verso::command();
    let bin_name = cmd.get_name().to_string();

    for sub in cmd.get_subcommands() {
        // `verso-sort(1)` rather than `sort(1)`.
        let page_name = format!("{bin_name}-{}", sub.get_name());
        write_page(sub.clone(), &out_dir, &page_name)?;
    }
    write_page(cmd, &out_dir, &bin_name)
}
