mod search;
mod symbol_file;

pub use symbol_file::SymbolFile;

use clap::{Parser, Subcommand};
use modfind_core::SearchConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "modfind",
    version,
    about = "Find usages of a Java type, method, or field with Moderne",
    long_about = "modfind turns a Java symbol into an OpenRewrite search pattern, starts a \
                  FindTypes/FindMethods/FindFields recipe run on Moderne, and prints the URL \
                  of the results page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file (see SearchConfig for the keys)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Credential file holding the bearer token. Defaults to ~/.moderne/token.txt
    #[arg(long, global = true, value_name = "FILE")]
    pub token_file: Option<PathBuf>,

    /// GraphQL endpoint of the search service
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the request body instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find usages of a type
    Type {
        /// Fully qualified type name, e.g. com.acme.Foo
        #[arg(value_name = "TYPE_FQN")]
        fqn: String,
    },
    /// Find calls of a method or constructor
    #[command(
        long_about = "Parameters are JVM or JDT type signatures such as Ljava/lang/String;, [I, \
                      or QString;. Unresolved names are looked up in java.lang only; use the \
                      `symbol` command for full import and type-parameter information."
    )]
    Method {
        /// Fully qualified name of the declaring type
        #[arg(value_name = "TYPE_FQN")]
        declaring_type: String,

        /// Simple method name (ignored for constructors)
        #[arg(value_name = "NAME")]
        name: String,

        /// Search for the constructor instead of a method
        #[arg(long)]
        constructor: bool,

        /// Parameter type signature, repeated in declaration order
        #[arg(long = "param", value_name = "SIGNATURE", allow_hyphen_values = true)]
        params: Vec<String>,
    },
    /// Find accesses of a field
    Field {
        /// Fully qualified name of the declaring type
        #[arg(value_name = "TYPE_FQN")]
        declaring_type: String,

        /// Field name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Search for a symbol described in a JSON file, together with its scope
    Symbol {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Defaults, config file, environment, then command-line flags.
    pub fn search_config(&self) -> Result<SearchConfig, Box<dyn std::error::Error>> {
        let mut config = SearchConfig::load(self.config.as_deref())?;
        if let Some(path) = &self.token_file {
            config.credential_path = path.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        Ok(config)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = modfind_runtime::init_logging("cli", true);

    let config = cli.search_config()?;
    let search = modfind_runtime::build_default_search(config);
    search::run(&search, cli.command, cli.dry_run)
}
