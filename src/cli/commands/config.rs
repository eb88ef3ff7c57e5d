use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // Path del file di configurazione
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration looks good.");
            }
            for p in problems {
                warning(p);
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let used = open_in_editor(&path, editor.as_deref())?;
            success(format!("Configuration edited with '{used}'."));
        }
    }

    Ok(())
}

/// Open `path` in the first editor that exits cleanly: `--editor`, then
/// `$VISUAL` / `$EDITOR`, then the platform default. Returns the one used.
fn open_in_editor(path: &Path, preferred: Option<&str>) -> AppResult<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let mut candidates: Vec<String> = Vec::new();
    let from_env = ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok());
    for name in preferred
        .map(str::to_string)
        .into_iter()
        .chain(from_env)
        .chain([platform.to_string()])
    {
        let name = name.trim().to_string();
        if !name.is_empty() && !candidates.contains(&name) {
            candidates.push(name);
        }
    }

    for editor in &candidates {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => return Ok(editor.clone()),
            _ => warning(format!("Editor '{editor}' did not run, trying the next one")),
        }
    }

    Err(AppError::Config(format!(
        "no editor could open {} (tried {})",
        path.display(),
        candidates.join(", ")
    )))
}
