//! oxide-dialect CLI
//!
//! Command-line access to the dialect type catalogs, column drafting, type
//! classification and SQL text helpers.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_dialect::config::DialectConfig;
use oxide_dialect::inference::{infer_columns_for_with, infer_columns_with};
use oxide_dialect::prelude::*;
use oxide_dialect::statement::split_statements;

/// Map logical column types onto SQL dialects.
#[derive(Parser, Debug)]
#[command(name = "oxide-dialect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target dialect (overrides the configuration file).
    #[arg(short, long, env = "OXIDE_DIALECT")]
    dialect: Option<DialectKind>,

    /// JSON configuration file.
    #[arg(short, long, env = "OXIDE_DIALECT_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List physical types, for one logical type or the whole catalog.
    Types {
        /// Logical type (e.g. Email, Currency, ID).
        logical: Option<LogicalColumnType>,

        /// Identity kind for ID columns: none, ai or ag.
        #[arg(short, long)]
        identity: Option<IdentityKind>,
    },

    /// Print the draft column for a logical type.
    Draft {
        /// Logical type.
        logical: LogicalColumnType,

        /// Column name.
        #[arg(short, long, default_value = "column")]
        name: String,

        /// Identity kind for ID columns: none, ai or ag.
        #[arg(short, long)]
        identity: Option<IdentityKind>,
    },

    /// Print the columns of a new table.
    NewTable {
        /// Identity kind of the key column: none, ai or ag.
        #[arg(short, long)]
        identity: Option<IdentityKind>,
    },

    /// Classify physical type names.
    Classify {
        /// Physical type names, e.g. "int(11) unsigned".
        #[arg(required = true)]
        physical: Vec<String>,
    },

    /// Split SQL text into statements.
    Split {
        /// SQL text (read from stdin if omitted).
        sql: Option<String>,
    },

    /// Row-limit the first statement if it is a SELECT.
    Preview {
        /// SQL text (read from stdin if omitted).
        sql: Option<String>,

        /// Row limit.
        #[arg(short, long)]
        limit: Option<u64>,
    },

    /// Infer draft columns from a sample JSON object.
    Infer {
        /// JSON sample (read from stdin if omitted).
        sample: Option<String>,

        /// Use the dialect's default physical types.
        #[arg(long)]
        retarget: bool,
    },
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    physical: &'a str,
    category: AbstractCategory,
    suggested: LogicalColumnType,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;
    let stdout = io::stdout();
    run(&cli, &config, &mut stdout.lock())
}

/// Loads the configuration file, then applies flag overrides.
fn load_config(cli: &Cli) -> anyhow::Result<DialectConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DialectConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DialectConfig::default(),
    };
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect;
    }
    debug!(dialect = %config.dialect, "Configuration loaded");
    Ok(config)
}

fn run(cli: &Cli, config: &DialectConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let profile = config.profile();

    match &cli.command {
        Commands::Types { logical, identity } => {
            let types = match logical {
                Some(logical) => {
                    profile.physical_types_for(*logical, identity.unwrap_or(config.identity))
                }
                None => profile.catalog(),
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(types)?)?;
            } else {
                for ty in types {
                    writeln!(out, "{ty}")?;
                }
            }
        }

        Commands::Draft {
            logical,
            name,
            identity,
        } => {
            let column =
                profile.draft_column(name, *logical, identity.unwrap_or(config.identity))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&column)?)?;
        }

        Commands::NewTable { identity } => {
            let columns = profile.new_table_columns(identity.unwrap_or(config.identity))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&columns)?)?;
        }

        Commands::Classify { physical } => {
            let resolver = TypeResolver::new(profile);
            let results: Vec<Classification<'_>> = physical
                .iter()
                .map(|p| {
                    let category = resolver.classify(p);
                    Classification {
                        physical: p,
                        category,
                        suggested: category.suggest_logical_type(),
                    }
                })
                .collect();
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
            } else {
                for r in &results {
                    writeln!(out, "{}\t{}\t{}", r.physical, r.category, r.suggested)?;
                }
            }
        }

        Commands::Split { sql } => {
            let sql = text_or_stdin(sql.as_deref())?;
            let statements = split_statements(&sql);
            info!(count = statements.len(), "Split statements");
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&statements)?)?;
            } else {
                for statement in &statements {
                    writeln!(out, "{statement}")?;
                }
            }
        }

        Commands::Preview { sql, limit } => {
            let sql = text_or_stdin(sql.as_deref())?;
            let limit = limit.or(Some(config.preview_limit));
            writeln!(out, "{}", profile.limit_preview(&sql, limit))?;
        }

        Commands::Infer { sample, retarget } => {
            let text = text_or_stdin(sample.as_deref())?;
            let sample: serde_json::Value =
                serde_json::from_str(&text).context("sample is not valid JSON")?;
            let columns = if *retarget {
                infer_columns_for_with(&sample, profile, &config.inference)
            } else {
                infer_columns_with(&sample, &config.inference)
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&columns)?)?;
        }
    }

    Ok(())
}

fn text_or_stdin(text: Option<&str>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = load_config(&cli).unwrap();
        run_with(&cli, &config)
    }

    fn run_with(cli: &Cli, config: &DialectConfig) -> String {
        let mut out = Vec::new();
        run(cli, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_dialect_alias() {
        let cli = Cli::try_parse_from(["oxide-dialect", "--dialect", "pg", "types"]).unwrap();
        assert_eq!(cli.dialect, Some(DialectKind::Postgres));
        assert!(matches!(cli.command, Commands::Types { logical: None, .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_dialect() {
        assert!(Cli::try_parse_from(["oxide-dialect", "--dialect", "db2", "types"]).is_err());
    }

    #[test]
    fn test_types_for_logical() {
        let out = run_args(&["oxide-dialect", "-d", "mysql", "types", "ID", "-i", "ai"]);
        assert_eq!(out.lines().next(), Some("int"));
    }

    #[test]
    fn test_classify_plain() {
        let out = run_args(&["oxide-dialect", "-d", "mssql", "classify", "bit", "nvarchar(50)"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["bit\tboolean\tCheckbox", "nvarchar(50)\tstring\tSingleLineText"]);
    }

    #[test]
    fn test_draft_is_json() {
        let out = run_args(&["oxide-dialect", "-d", "oracle", "draft", "Checkbox", "-n", "done"]);
        let column: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(column["name"], "done");
        assert_eq!(column["physical_type"], "NUMBER");
        assert_eq!(column["length"], 1);
    }

    #[test]
    fn test_split_and_preview() {
        let out = run_args(&["oxide-dialect", "split", "SELECT 1; SELECT ';' ;"]);
        assert_eq!(out, "SELECT 1;\nSELECT ';' ;\n");

        let out = run_args(&["oxide-dialect", "-d", "sqlite", "preview", "select * from t"]);
        assert_eq!(out, "select * from t LIMIT 0,100;\n");
    }

    #[test]
    fn test_infer() {
        let out = run_args(&["oxide-dialect", "infer", r#"{"age": 30, "tags": []}"#]);
        let columns: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(columns.as_array().unwrap().len(), 1);
        assert_eq!(columns[0]["physical_type"], "int");
        assert_eq!(columns[0]["state"], "new");
    }

    #[test]
    fn test_infer_retarget_uses_configured_options() {
        let cli = Cli::try_parse_from([
            "oxide-dialect",
            "-d",
            "postgres",
            "infer",
            "--retarget",
            r#"{"name": "Ada", "age": 30}"#,
        ])
        .unwrap();
        let config = DialectConfig::from_json_str(
            r#"{"dialect": "postgres", "inference": {"short_text_length": 120, "integer_precision": 12}}"#,
        )
        .unwrap();
        let out = run_with(&cli, &config);
        let columns: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(columns[0]["physical_type"], "character varying");
        assert_eq!(columns[0]["length"], 120);
        assert_eq!(columns[1]["physical_type"], "bigint");
        assert_eq!(columns[1]["precision"], 12);
    }
}
