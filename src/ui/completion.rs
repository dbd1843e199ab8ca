//! Shell completion system for urlshort

use clap::{Command, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "urlshort";

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

/// Install shell completion to standard user location
pub fn install_completion(shell: Shell) -> Result<String, String> {
    let home =
        std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?;
    install_completion_in(shell, Path::new(&home))
}

fn install_completion_in(shell: Shell, home: &Path) -> Result<String, String> {
    let completion_dir = get_completion_directory(shell, home)?;
    std::fs::create_dir_all(&completion_dir).map_err(|e| {
        format!(
            "Failed to create directory {}: {e}",
            completion_dir.display()
        )
    })?;

    let completion_path = completion_dir.join(get_completion_filename(shell));
    let completion_script = generate_completion_script(shell)?;

    std::fs::write(&completion_path, completion_script).map_err(|e| {
        format!(
            "Failed to write completion file to {}: {}",
            completion_path.display(),
            e
        )
    })?;

    Ok(format!(
        "Shell completion installed successfully!\n\n{}",
        get_shell_setup_instructions(shell, &completion_path)
    ))
}

/// Get the standard completion directory for a shell
fn get_completion_directory(shell: Shell, home: &Path) -> Result<PathBuf, String> {
    match shell {
        Shell::Bash => Ok(home.join(".local/share/bash-completion/completions")),
        Shell::Zsh => Ok(home.join(".local/share/zsh/site-functions")),
        Shell::Fish => Ok(home.join(".config/fish/completions")),
        Shell::PowerShell | Shell::Elvish => Err(format!(
            "{shell:?} completion installation not supported. Use '{BIN_NAME} completion-generate {shell}' and add it to your profile manually."
        )),
        _ => Err(format!("Unsupported shell: {shell:?}")),
    }
}

/// Get the standard filename for shell completions
fn get_completion_filename(shell: Shell) -> String {
    match shell {
        Shell::Zsh => format!("_{BIN_NAME}"),
        Shell::Fish => format!("{BIN_NAME}.fish"),
        _ => BIN_NAME.to_string(),
    }
}

/// Generate completion script for the given shell
fn generate_completion_script(shell: Shell) -> Result<String, String> {
    let mut cmd = crate::ui::cli::Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buf);

    String::from_utf8(buf).map_err(|e| format!("Failed to generate completion script: {e}"))
}

/// Get shell-specific setup instructions
fn get_shell_setup_instructions(shell: Shell, completion_path: &Path) -> String {
    match shell {
        Shell::Bash => format!(
            "Completion installed to: {}\n\n\
            Bash picks it up automatically when bash-completion is installed.\n\
            Restart your shell or run: source {}",
            completion_path.display(),
            completion_path.display()
        ),
        Shell::Zsh => format!(
            "Completion installed to: {}\n\n\
            Add this to your ~/.zshrc:\n\
            fpath=(~/.local/share/zsh/site-functions $fpath)\n\
            autoload -U compinit && compinit",
            completion_path.display()
        ),
        _ => format!(
            "Completion installed to: {}\n\nRestart your shell to enable it.",
            completion_path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_completion_filename() {
        assert_eq!(get_completion_filename(Shell::Bash), "urlshort");
        assert_eq!(get_completion_filename(Shell::Zsh), "_urlshort");
        assert_eq!(get_completion_filename(Shell::Fish), "urlshort.fish");
    }

    #[test]
    fn test_generate_completion_script_mentions_flags() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let script = generate_completion_script(shell).unwrap();
            assert!(script.contains("urlshort"), "{shell:?}");
            assert!(script.contains("split-path"), "{shell:?}");
        }
    }

    #[test]
    fn test_install_completion_bash_into_home() {
        let home = TempDir::new().unwrap();

        let message = install_completion_in(Shell::Bash, home.path()).unwrap();
        let installed = home
            .path()
            .join(".local/share/bash-completion/completions/urlshort");

        assert!(installed.exists());
        assert!(message.contains("installed successfully"));
    }

    #[test]
    fn test_install_completion_fish_into_home() {
        let home = TempDir::new().unwrap();

        install_completion_in(Shell::Fish, home.path()).unwrap();

        assert!(
            home.path()
                .join(".config/fish/completions/urlshort.fish")
                .exists()
        );
    }

    #[test]
    fn test_install_completion_unsupported_shells() {
        let home = TempDir::new().unwrap();

        let err = install_completion_in(Shell::PowerShell, home.path()).unwrap_err();
        assert!(err.contains("completion-generate"));
        assert!(install_completion_in(Shell::Elvish, home.path()).is_err());
    }
}
