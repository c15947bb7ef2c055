//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the Dossier CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the Dossier banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
   {}
"#,
                " ____    ___   ____   ____   ___  _____  ____  ".bright_cyan().bold(),
                "|  _ \\  / _ \\ / ___| / ___| |_ _|| ____||  _ \\ ".bright_cyan().bold(),
                "| | | || | | |\\___ \\ \\___ \\  | | |  _|  | |_) |".cyan().bold(),
                "| |_| || |_| | ___) | ___) | | | | |___ |  _ < ".blue().bold(),
                "|____/  \\___/ |____/ |____/ |___||_____||_| \\_\\".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Automated Research Brief Server".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 ____    ___   ____   ____   ___  _____  ____
|  _ \  / _ \ / ___| / ___| |_ _|| ____||  _ \
| | | || | | |\___ \ \___ \  | | |  _|  | |_) |
| |_| || |_| | ___) | ___) | | | | |___ |  _ <
|____/  \___/ |____/ |____/ |___||_____||_| \_\

   Automated Research Brief Server v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}
