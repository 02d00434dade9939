//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Change a key's value in a configuration file, in place
///
/// Works on `key <assignment> value` syntax as found in shell scripts,
/// Makefiles, INI-style files, and PKGBUILDs. Formatting, comments, and
/// unrelated lines are left untouched.
///
/// Examples:
///   confset Makefile.defaults NETSURF_USE_HARU_PDF NO
///   confset Makefile CC clang
///   confset my.conf x=42
///   confset PKGBUILD sha256sums "('123abc' 'abc123')" ')'
///   confset app.py NUMS "[1, 2, 3]" ']'
///   confset -a server.conf ABC 123
#[derive(Parser, Debug)]
#[command(name = "confset")]
#[command(author, version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Add the option if no existing line matches, creating the file if needed
    #[arg(short, long)]
    pub add: bool,

    /// Configuration file to edit
    pub file: PathBuf,

    /// Key to change, or a `key=value` pair when no value argument follows
    pub key: String,

    /// New value for the key
    pub value: Option<String>,

    /// End marker for a multi-line value (not available with --add)
    pub end_marker: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_key_value_form() {
        let cli = Cli::parse_from(["confset", "Makefile", "CC", "clang"]);
        assert!(!cli.add);
        assert!(!cli.verbose);
        assert_eq!(cli.file, PathBuf::from("Makefile"));
        assert_eq!(cli.key, "CC");
        assert_eq!(cli.value.as_deref(), Some("clang"));
        assert_eq!(cli.end_marker, None);
    }

    #[test]
    fn parse_pair_form() {
        let cli = Cli::parse_from(["confset", "my.conf", "x=42"]);
        assert_eq!(cli.key, "x=42");
        assert_eq!(cli.value, None);
    }

    #[test]
    fn parse_multiline_form() {
        let cli = Cli::parse_from(["confset", "PKGBUILD", "md5sums", "('abc')", ")"]);
        assert_eq!(cli.end_marker.as_deref(), Some(")"));
    }

    #[test]
    fn parse_add_flag() {
        let cli = Cli::parse_from(["confset", "-a", "server.conf", "ABC", "123"]);
        assert!(cli.add);
        assert_eq!(cli.key, "ABC");
        assert_eq!(cli.value.as_deref(), Some("123"));
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["confset", "-v", "my.conf", "x=42"]);
        assert!(cli.verbose);
    }
}
