//! Blazer CLI — command-line interface for Blazegraph-style SPARQL endpoints
//!
//! Uses the blazer-sdk RemoteClient to talk to a running endpoint.

use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use blazer_sdk::{
    normalize, BindingResult, BlazegraphConfig, Literal, PartialGraphPattern, Quad, RemoteClient,
    SparqlClient, Term,
};
use std::io::Read;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "blazer", version, about = "Blazegraph SPARQL client")]
struct Cli {
    /// Endpoint host
    #[arg(long, default_value = "localhost", global = true, env = "BLAZE_HOST")]
    host: String,

    /// Endpoint port
    #[arg(long, default_value_t = 9999, global = true, env = "BLAZE_PORT")]
    port: u16,

    /// Namespace (knowledge base)
    #[arg(long, default_value = "kb", global = true, env = "BLAZE_NAMESPACE")]
    namespace: String,

    /// Servlet context name
    #[arg(long, default_value = "bigdata", global = true, env = "BLAZE_NAME")]
    blazename: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log requests (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a SELECT query (`-` reads it from stdin)
    Select {
        query: String,

        /// Include inferred statements
        #[arg(long)]
        inferred: bool,
    },
    /// Run a SPARQL UPDATE (`-` reads it from stdin)
    Update { query: String },
    /// Print statements matching a pattern
    Read {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Include inferred statements
        #[arg(long)]
        inferred: bool,
    },
    /// Check whether any statement matches a pattern
    Exists {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Include inferred statements
        #[arg(long)]
        inferred: bool,
    },
    /// Delete statements matching a pattern
    DeletePattern {
        #[command(flatten)]
        pattern: PatternArgs,
    },
}

#[derive(Args)]
struct PatternArgs {
    /// Subject IRI, e.g. `<http://example.com/a>`
    #[arg(long, short)]
    subject: Option<String>,

    /// Predicate IRI
    #[arg(long, short)]
    predicate: Option<String>,

    /// Object IRI (or plain string with --literal)
    #[arg(long, short)]
    object: Option<String>,

    /// Treat --object as a plain string literal
    #[arg(long)]
    literal: bool,

    /// Graph IRI; may be repeated
    #[arg(long, short)]
    graph: Vec<String>,
}

impl PatternArgs {
    fn to_pattern(&self) -> PartialGraphPattern {
        let mut pattern = PartialGraphPattern::new();
        if let Some(subject) = &self.subject {
            pattern = pattern.subject(subject.as_str());
        }
        if let Some(predicate) = &self.predicate {
            pattern = pattern.predicate(predicate.as_str());
        }
        if let Some(object) = &self.object {
            let object: Term = if self.literal {
                Literal::new_simple_literal(object.as_str()).into()
            } else {
                object.as_str().into()
            };
            pattern = pattern.object(object);
        }
        pattern.graphs(self.graph.iter().map(String::as_str))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = BlazegraphConfig {
        hostname: cli.host.clone(),
        port: cli.port,
        namespace: cli.namespace.clone(),
        blazename: cli.blazename.clone(),
    };

    if let Err(e) = run(&cli, &config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &BlazegraphConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = RemoteClient::from_config(config)?;
    info!(endpoint = client.endpoint_url(), "connected");

    match &cli.command {
        Commands::Select { query, inferred } => {
            let query = read_query(query)?;
            let rows = client.query(&query, *inferred).await?;
            print_bindings(&rows, &cli.format)?;
        }
        Commands::Update { query } => {
            let query = read_query(query)?;
            let stats = client.update(&query).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                _ => match stats.mutation_count() {
                    Some(n) => println!("{} statement(s) modified", n),
                    None => println!("ok"),
                },
            }
        }
        Commands::Read { pattern, inferred } => {
            let quads = client.read_quads(&pattern.to_pattern(), *inferred).await?;
            print_quads(&quads, &cli.format)?;
        }
        Commands::Exists { pattern, inferred } => {
            let found = client
                .check_pattern_existence(&pattern.to_pattern(), *inferred)
                .await?;
            println!("{}", found);
        }
        Commands::DeletePattern { pattern } => {
            let body = client.delete_quads(&pattern.to_pattern()).await?;
            println!("{}", body.trim());
        }
    }

    Ok(())
}

/// Query text from the argument, or stdin for `-`, normalized
fn read_query(arg: &str) -> std::io::Result<String> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(normalize(&text))
    } else {
        Ok(normalize(arg))
    }
}

fn print_bindings(
    rows: &[BindingResult],
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut columns: Vec<&String> = rows.iter().flat_map(|row| row.keys()).collect();
    columns.sort();
    columns.dedup();

    let cell = |row: &BindingResult, column: &str| -> String {
        row.get(column).map(|v| v.value.clone()).unwrap_or_default()
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Csv => {
            if !columns.is_empty() {
                let header: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
                println!("{}", header.join(","));
                for row in rows {
                    let cells: Vec<String> =
                        columns.iter().map(|c| format_csv_value(&cell(row, c))).collect();
                    println!("{}", cells.join(","));
                }
            }
        }
        OutputFormat::Table => {
            if columns.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&columns);

            for row in rows {
                let cells: Vec<String> = columns.iter().map(|c| cell(row, c)).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }

    Ok(())
}

fn print_quads(quads: &[Quad], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let graph_of = |q: &Quad| q.graph.as_ref().map(|g| g.to_string()).unwrap_or_default();

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = quads
                .iter()
                .map(|q| {
                    serde_json::json!({
                        "subject": q.subject.to_string(),
                        "predicate": q.predicate.to_string(),
                        "object": q.object.to_string(),
                        "graph": q.graph.as_ref().map(|g| g.to_string()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("subject,predicate,object,graph");
            for q in quads {
                println!(
                    "{},{},{},{}",
                    format_csv_value(q.subject.as_str()),
                    format_csv_value(q.predicate.as_str()),
                    format_csv_value(&q.object.to_string()),
                    format_csv_value(&graph_of(q)),
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["subject", "predicate", "object", "graph"]);
            for q in quads {
                table.add_row(vec![
                    q.subject.to_string(),
                    q.predicate.to_string(),
                    q.object.to_string(),
                    graph_of(q),
                ]);
            }
            println!("{}", table);
            println!("{} statement(s)", quads.len());
        }
    }

    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
