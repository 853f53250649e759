use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clipdex")]
#[command(author, version, about = "Telegram bot that files MP3 clips under numeric names", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Resolve a query ("5", "5.mp3", "3-5") against the database
    Lookup {
        /// The query, exactly as a user would send it
        query: String,
    },

    /// List stored clips
    List {
        /// Maximum number of records to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["clipdex"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_lookup_takes_raw_query() {
        let cli = Cli::try_parse_from(["clipdex", "lookup", "3-5"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                query: "3-5".to_string()
            })
        );
    }

    #[test]
    fn test_list_limit() {
        let cli = Cli::try_parse_from(["clipdex", "list"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { limit: 50 }));

        let cli = Cli::try_parse_from(["clipdex", "list", "--limit", "5"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { limit: 5 }));
    }
}
