//! Startup banner

use crate::ui::color::{Colors, colorize, colorize_bold};

const LOGO: [&str; 6] = [
    r"  _   _ ____  _     ____  _   _  ___  ____ _____ ",
    r" | | | |  _ \| |   / ___|| | | |/ _ \|  _ \_   _|",
    r" | | | | |_) | |   \___ \| |_| | | | | |_) || |  ",
    r" | |_| |  _ <| |___ ___) |  _  | |_| |  _ < | |  ",
    r"  \___/|_| \_\_____|____/|_| |_|\___/|_| \_\|_|  ",
    r"                                                 ",
];

/// Banner text, colored when the terminal supports it
pub fn render_banner() -> String {
    let mut lines: Vec<String> = LOGO
        .iter()
        .map(|line| colorize_bold(line, Colors::RED))
        .collect();

    lines.push(format!(
        " {} {}",
        colorize_bold("Tool Type:", Colors::CYAN),
        colorize(
            "URL Shortener & Parameter Generator",
            &format!("{}{}", Colors::CYAN, Colors::ITALIC)
        )
    ));
    lines.push(format!(
        " {} {}",
        colorize_bold("Use Case: ", Colors::YELLOW),
        colorize(
            "Security Testing • Web Dev Utility • Payload Injector",
            &format!("{}{}", Colors::YELLOW, Colors::ITALIC)
        )
    ));
    lines.push(format!(
        " {} {}   {} {}",
        colorize_bold("Version:", Colors::BLUE),
        colorize_bold(env!("CARGO_PKG_VERSION"), Colors::BLUE),
        colorize_bold("License:", Colors::GREEN),
        colorize_bold(env!("CARGO_PKG_LICENSE"), Colors::GREEN)
    ));

    lines.join("\n")
}

pub fn print_banner() {
    println!("{}\n", render_banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_banner_contains_metadata() {
        let banner = render_banner();

        assert!(banner.contains("Parameter Generator"));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
        assert!(banner.contains("MIT"));
    }

    #[test]
    fn test_render_banner_line_count() {
        assert_eq!(render_banner().lines().count(), LOGO.len() + 3);
    }
}
