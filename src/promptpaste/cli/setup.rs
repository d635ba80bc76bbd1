use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pp",
    bin_name = "pp",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "Store reusable prompts and instructions locally",
    long_about = "Store reusable prompts and instructions locally.\n\n\
                  Run `pp <id>` to print a stored entry, e.g. `pp do_tests` for do_tests.md."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a file into storage
    #[command(alias = "add")]
    Save {
        /// File to save (or a folder holding a single SKILL.md)
        path: PathBuf,

        /// Rename with a numeric suffix if the name is taken
        #[arg(short = 'r', long, conflicts_with_all = ["overwrite", "new_name"])]
        rename: bool,

        /// Overwrite an existing entry without asking
        #[arg(short = 'o', long, conflicts_with = "new_name")]
        overwrite: bool,

        /// Save under this name; fails if it is taken
        #[arg(short = 'n', long = "new-name", value_name = "NAME")]
        new_name: Option<String>,
    },

    /// Show stored entries with a preview
    #[command(alias = "ls")]
    List,

    /// Delete an entry
    Rm {
        /// Entry id (file name without extension)
        id: String,
    },

    /// Open the storage directory
    Store,

    /// Show the effective configuration
    Config,

    /// Print an entry: `pp <id>`
    #[command(external_subcommand)]
    Get(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn save_with_flags() {
        let cli = parse(&["save", "notes.md", "-r"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Save { rename: true, overwrite: false, new_name: None, .. })
        ));
    }

    #[test]
    fn add_is_an_alias_of_save() {
        let cli = parse(&["add", "notes.md", "-n", "other.md"]);
        match cli.command {
            Some(Commands::Save { path, new_name, .. }) => {
                assert_eq!(path, PathBuf::from("notes.md"));
                assert_eq!(new_name.as_deref(), Some("other.md"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ls_is_an_alias_of_list() {
        assert!(matches!(parse(&["ls"]).command, Some(Commands::List)));
        assert!(matches!(parse(&["list"]).command, Some(Commands::List)));
    }

    #[test]
    fn collision_flags_are_exclusive() {
        let res = Cli::try_parse_from(["pp", "save", "a.md", "-r", "-o"]);
        assert!(res.is_err());
    }

    #[test]
    fn bare_word_is_a_lookup() {
        let cli = parse(&["do_tests"]);
        match cli.command {
            Some(Commands::Get(args)) => assert_eq!(args, vec!["do_tests".to_string()]),
            other => panic!("unexpected {:?}", other),
        }
    }
}
