use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::app::AppError;
use crate::cli::Cli;

const BIN_NAME: &str = "godo";

pub fn generate_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, buf);
}

pub fn detect_current_shell() -> Option<Shell> {
    let shell_var = std::env::var("SHELL").ok()?;
    shell_from_path(&shell_var)
}

fn shell_from_path(path: &str) -> Option<Shell> {
    match path.rsplit('/').next()? {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

fn completions_install_path_for_home(shell: Shell, home: &Path) -> Option<PathBuf> {
    match shell {
        Shell::Bash => Some(home.join(".local/share/bash-completion/completions/godo")),
        Shell::Zsh => Some(home.join(".zfunc/_godo")),
        Shell::Fish => Some(home.join(".config/fish/completions/godo.fish")),
        _ => None,
    }
}

pub fn install_completions(shell: Shell) -> io::Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    install_completions_into(shell, Path::new(&home))
}

fn install_completions_into(shell: Shell, home: &Path) -> io::Result<PathBuf> {
    let path = completions_install_path_for_home(shell, home).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no install path for {shell:?}"),
        )
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut buf = Vec::new();
    generate_completions(shell, &mut buf);
    std::fs::write(&path, buf)?;
    Ok(path)
}

/// Shell rc files are never edited; zsh users get the line to add themselves.
fn activation_hint(shell: Shell, path: &Path) -> Option<String> {
    match shell {
        Shell::Zsh => path.parent().map(|dir| {
            format!(
                "add `fpath=({} $fpath)` before compinit in ~/.zshrc",
                dir.display()
            )
        }),
        _ => None,
    }
}

pub fn run_completions_command(shell: Option<Shell>, install: bool) -> Result<(), AppError> {
    let shell = match shell {
        Some(shell) => shell,
        None => detect_current_shell().ok_or_else(|| {
            AppError::InvalidArgument(
                "unable to detect shell from $SHELL; pass a shell name".to_string(),
            )
        })?,
    };

    if install {
        let path = install_completions(shell)?;
        println!("completions installed to {}", path.display());
        if let Some(hint) = activation_hint(shell, &path) {
            println!("{hint}");
        }
    } else {
        let mut stdout = io::stdout().lock();
        generate_completions(shell, &mut stdout);
    }
    Ok(())
}
