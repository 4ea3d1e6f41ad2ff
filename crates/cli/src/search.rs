use crate::Commands;
use crate::symbol_file::SymbolFile;
use modfind_api::{
    CodeSymbol, DeclaringType, FieldSymbol, MethodParameters, MethodSymbol, TypeSymbol,
};
use modfind_core::{BrowserLauncher, ModerneSearch, SearchOutcome, Transport};
use modfind_java::ImportTable;
use modfind_java::scope::TypeContext;
use tracing::info;

/// Browser stand-in for the terminal: the page is printed for the user to open.
pub struct PrintBrowser;

impl BrowserLauncher for PrintBrowser {
    fn open(&self, url: &str) -> modfind_core::Result<()> {
        println!("{}", url);
        Ok(())
    }
}

pub fn run<T: Transport>(
    search: &ModerneSearch<T>,
    command: Commands,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (symbol, scope) = symbol_for(command)?;

    if dry_run {
        match search.dry_run(&symbol, &scope)? {
            Some(body) => println!("{}", body),
            None => info!("Nothing to send for {}", symbol.owner_fqn()),
        }
        return Ok(());
    }

    match search.run_and_open(&symbol, &scope, &PrintBrowser)? {
        SearchOutcome::Onboarding { .. } => info!(
            "No credential at {}; open the page above to get one",
            search.config().credential_path.display()
        ),
        SearchOutcome::Started { run_id, .. } => info!("Recipe run {} started", run_id),
        SearchOutcome::NoResult => info!("The search service did not start a run"),
        SearchOutcome::Aborted => {}
    }
    Ok(())
}

/// The symbol named on the command line, and a scope that can resolve names inside it.
fn symbol_for(
    command: Commands,
) -> Result<(CodeSymbol, ImportTable), Box<dyn std::error::Error>> {
    Ok(match command {
        Commands::Type { fqn } => (CodeSymbol::Type(TypeSymbol { fqn }), ImportTable::new()),
        Commands::Field {
            declaring_type,
            name,
        } => (
            CodeSymbol::Field(FieldSymbol {
                declaring_type,
                name,
            }),
            ImportTable::new(),
        ),
        Commands::Method {
            declaring_type,
            name,
            constructor,
            params,
        } => {
            // Only java.lang is visible without a symbol file.
            let scope = ImportTable::new().with_type(&declaring_type, TypeContext::default());
            let symbol = CodeSymbol::Method(MethodSymbol {
                declaring_type: DeclaringType::new(declaring_type),
                name,
                is_constructor: constructor,
                parameters: MethodParameters::Source(params),
                type_parameters: Vec::new(),
            });
            (symbol, scope)
        }
        Commands::Symbol { file } => {
            let file = SymbolFile::read(&file)?;
            (file.symbol, file.scope)
        }
    })
}
