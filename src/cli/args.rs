/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser};

use crate::p4::Revision;

/// p4fetch: fetch one depot file revision to a local path.
#[derive(Debug, Parser)]
#[command(
    name = "p4fetch",
    about = "Get a file from the Perforce depot and store it under a local path",
    long_about = "Get a file from the Perforce depot and store it under a local path.\n\n\
                  Prints <local path>/<name>#<revision><ext> (the P4 file naming convention).\n\
                  Without --revision the head revision is fetched.\n\
                  The p4 command line client must be installed and on PATH.",
    version,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print version and exit.
    // Only carries the `-v` flag; clap exits before the field is ever read.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    pub version: Option<bool>,

    /// Depot username (passed to p4 as -u).
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Revision number to fetch (default: head revision).
    #[arg(short, long, value_name = "N")]
    pub revision: Option<Revision>,

    /// Name or path of the p4 client binary.
    #[arg(long = "p4", value_name = "PROGRAM", default_value = "p4")]
    pub p4_command: String,

    /// Emit the result or error as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log p4 invocations and stage timings to stderr.
    #[arg(long)]
    pub debug: bool,

    /// File path and name in the depot, e.g. //proj/dev/a.txt.
    #[arg(value_name = "DEPOT_FILE")]
    pub depot_file: String,

    /// Local directory to store the file in.
    #[arg(value_name = "LOCAL_DIR")]
    pub local_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "p4fetch", "-u", "alice", "-r", "7", "//proj/a.txt", "/tmp/out",
        ])
        .unwrap();
        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.revision.map(Revision::get), Some(7));
        assert_eq!(cli.depot_file, "//proj/a.txt");
        assert_eq!(cli.local_dir, "/tmp/out");
        assert_eq!(cli.p4_command, "p4");
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "p4fetch",
            "--user",
            "bob",
            "--revision",
            "3",
            "--json",
            "//proj/a.txt",
            ".",
        ])
        .unwrap();
        assert_eq!(cli.user.as_deref(), Some("bob"));
        assert_eq!(cli.revision.map(Revision::get), Some(3));
        assert!(cli.json);
    }

    #[test]
    fn test_revision_defaults_to_head() {
        let cli = Cli::try_parse_from(["p4fetch", "//proj/a.txt", "/tmp"]).unwrap();
        assert!(cli.revision.is_none());
    }

    #[test]
    fn test_missing_positionals() {
        let err = Cli::try_parse_from(["p4fetch", "//proj/a.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_bad_revision() {
        for bad in ["abc", "0", "-1"] {
            let result = Cli::try_parse_from(["p4fetch", "-r", bad, "//proj/a.txt", "/tmp"]);
            assert!(result.is_err(), "accepted revision {bad}");
        }
    }

    #[test]
    fn test_version_without_positionals() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["p4fetch", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
