use std::path::PathBuf;

use clap::Args;
use clap_complete::{Shell, generate_to};

const SHELLS: [Shell; 5] = [
    Shell::Bash,
    Shell::Elvish,
    Shell::Fish,
    Shell::PowerShell,
    Shell::Zsh,
];

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Output directory, relative to the workspace root
    #[arg(long = "out-dir", default_value = "dist/share/completions")]
    pub out_dir: PathBuf,

    /// Only generate for this shell
    #[arg(long, value_enum)]
    pub shell: Option<Shell>,
}

pub fn cmd_completions(args: CompletionsArgs) -> Result<(), String> {
    let out_dir = crate::prepare_out_dir(&args.out_dir)?;
    let mut cmd = verso::command();
    let bin_name = cmd.get_name().to_string();

    let shells = args.shell.map_or_else(|| SHELLS.to_vec(), |shell| vec![shell]);
    for shell in shells {
        let path = generate_to(shell, &mut cmd, &bin_name, &out_dir)
            .map_err(|e| format!("{shell} completions: {e}"))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
