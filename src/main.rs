use clap::Parser;
use snipbox::application::init::init;
use snipbox::application::{
    CategoryService, ConfigService, DeleteSnippetService, DeleteTarget, ExportService,
    SaveSnippetService, SearchService,
};
use snipbox::cli::{format_category_list, format_snippet_list, CategoryAction, Cli, Commands};
use snipbox::domain::{FilterMode, SnippetId};
use snipbox::error::SnipboxError;
use snipbox::infrastructure::{ConfigKey, DirectorySink, Workspace, WriterSink};
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by SNIPBOX_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("SNIPBOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), SnipboxError> {
    let Some(command) = cli.command else {
        println!("snipbox - Save, search and export text snippets");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized snipbox at {}", path.display());
        }
        Commands::Save {
            text,
            category,
            url,
        } => {
            let store = Workspace::locate()?.store();
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let record = SaveSnippetService::new(&store).execute(&text, &category, &url)?;
            println!("Snippet saved! ({})", record.id);
        }
        Commands::List => {
            let store = Workspace::locate()?.store();
            let matches = SearchService::new(&store).list_all()?;
            print!("{}", with_newline(format_snippet_list(&matches)));
        }
        Commands::Search { query, mode } => {
            let workspace = Workspace::locate()?;
            let mode = match mode {
                Some(mode) => FilterMode::from_str(&mode).map_err(SnipboxError::Config)?,
                None => workspace.load_config()?.default_filter,
            };
            let matches = SearchService::new(&workspace.store()).execute(&query, mode)?;
            print!("{}", with_newline(format_snippet_list(&matches)));
        }
        Commands::Delete { id, index } => {
            let target = match (id, index) {
                (_, Some(index)) => DeleteTarget::Index(index),
                (Some(id), None) => DeleteTarget::Id(SnippetId(id)),
                (None, None) => {
                    return Err(SnipboxError::Validation(
                        "Give a snippet id or --index".to_string(),
                    ))
                }
            };
            let store = Workspace::locate()?.store();
            let removed = DeleteSnippetService::new(&store).execute(target)?;
            println!("Deleted {} ({})", removed.id, removed.category);
        }
        Commands::Categories { action } => {
            let store = Workspace::locate()?.store();
            let service = CategoryService::new(&store);
            match action {
                Some(CategoryAction::Add { name }) => {
                    if service.add(&name)? {
                        println!("Added category '{}'", name);
                    } else if name.is_empty() {
                        println!("Category name is empty, nothing added");
                    } else {
                        println!("Category '{}' already exists", name);
                    }
                }
                None => {
                    let categories = service.list()?;
                    print!("{}", with_newline(format_category_list(&categories)));
                }
            }
        }
        Commands::Export { output, stdout } => {
            let workspace = Workspace::locate()?;
            let store = workspace.store();
            let filename = workspace.load_config()?.export_filename;
            let service = ExportService::new(&store);
            if stdout {
                let mut sink = WriterSink::new(std::io::stdout().lock());
                service.execute(&mut sink, &filename)?;
            } else {
                let mut sink = DirectorySink::new(output);
                let location = service.execute(&mut sink, &filename)?;
                println!("Exported snippets to {}", location);
            }
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::locate()?);

            if list {
                let config = service.list()?;
                for key in ConfigKey::ALL {
                    println!("{} = {}", key, config.get(key));
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: snipbox config [--list | <key> [<value>]]");
                println!("Valid keys: default_filter, export_filename, created");
            }
        }
    }

    Ok(())
}

/// Read snippet text from stdin, dropping the trailing newline
fn read_stdin() -> Result<String, SnipboxError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
