//! Translate a JSON:API query string into SQL for one resource.
//!
//! ```text
//! MAX_PAGE_SIZE=50 jsonapi-params --table cars \
//!     --field name=col_name --field doors=col_doors --type col_doors=int \
//!     'sort=-name&filter[doors]=2,4&page[number]=1&page[size]=20'
//! ```
//!
//! Prints the SQL on the first line and one bound parameter per line after it.
//!
//! Exit status: 1 for unusable configuration, 2 for a rejected request.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use jsonapi_params::{
    ColumnMapper, ColumnTypes, Config, ConfigError, Identity, MapMapper, ParamsError, QueryParams,
    ValueKind, ValueSanitizer, filter_paging_sorting_from_params, log,
};
use jsonapi_sql::{Dialect, QueryBuilder, is_valid_sql_identifier, postgres, sqlite};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum DialectArg {
    /// `$1` placeholders, `= ANY($1)` membership
    #[default]
    Postgres,
    /// `?1` placeholders, `IN (?1, ?2)` membership
    Sqlite,
}

#[derive(Parser, Debug)]
#[command(name = "jsonapi-params")]
#[command(version, about = "Translate JSON:API page/sort/filter parameters into SQL")]
struct Args {
    /// Table to select from
    #[arg(long)]
    table: String,

    /// Allowed field and the column it maps to (repeatable)
    #[arg(long = "field", value_name = "PUBLIC=COLUMN", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Cast filter values for a column (repeatable). Without any, values stay strings
    #[arg(long = "type", value_name = "COLUMN=KIND", value_parser = parse_type)]
    types: Vec<(String, ValueKind)>,

    /// SQL dialect
    #[arg(long, value_enum, default_value_t)]
    dialect: DialectArg,

    /// Query string, with or without the leading path (`/cars?sort=-year`)
    query: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid table name {0:?}")]
    Table(String),

    #[error(transparent)]
    Request(#[from] ParamsError),
}

impl CliError {
    const fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Table(_) => 1,
            Self::Request(_) => 2,
        }
    }
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((field, column)) if !field.is_empty() && !column.is_empty() => {
            Ok((field.to_string(), column.to_string()))
        },
        _ => Err(format!("expected PUBLIC=COLUMN, got {s:?}")),
    }
}

fn parse_type(s: &str) -> Result<(String, ValueKind), String> {
    let (column, kind) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=KIND, got {s:?}"))?;
    let kind = ValueKind::from_name(kind)
        .ok_or_else(|| format!("unknown kind {kind:?} (int, float, bool, string)"))?;
    Ok((column.to_string(), kind))
}

fn query_params(raw: &str) -> QueryParams {
    if raw.contains('?') {
        QueryParams::from_path(raw)
    } else {
        QueryParams::parse(raw)
    }
}

/// SQL first, then one line per parameter.
fn run(args: &Args, config: &Config) -> Result<Vec<String>, CliError> {
    if !is_valid_sql_identifier(&args.table) {
        return Err(CliError::Table(args.table.clone()));
    }
    let mapper = MapMapper::try_new(args.fields.iter().cloned())?;
    let params = query_params(&args.query);

    match args.dialect {
        DialectArg::Postgres => with_sanitizer(postgres(&args.table), args, &params, config, &mapper),
        DialectArg::Sqlite => with_sanitizer(sqlite(&args.table), args, &params, config, &mapper),
    }
}

fn with_sanitizer<D: Dialect + 'static>(
    query: QueryBuilder<D>,
    args: &Args,
    params: &QueryParams,
    config: &Config,
    mapper: &MapMapper,
) -> Result<Vec<String>, CliError> {
    if args.types.is_empty() {
        render(query, params, config, mapper, &Identity)
    } else {
        let types = ColumnTypes::new(args.types.iter().cloned());
        render(query, params, config, mapper, &types)
    }
}

fn render<D: Dialect + 'static>(
    query: QueryBuilder<D>,
    params: &QueryParams,
    config: &Config,
    mapper: &impl ColumnMapper,
    sanitizer: &impl ValueSanitizer,
) -> Result<Vec<String>, CliError> {
    let modifier = filter_paging_sorting_from_params(params, config, mapper, sanitizer)?;
    let result = modifier.apply(query).build();

    let mut lines = Vec::with_capacity(result.params.len() + 1);
    lines.push(result.sql);
    lines.extend(result.params.iter().map(ToString::to_string));
    Ok(lines)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log!(error, "failed to load pagination config", error: err);
            return ExitCode::from(1);
        },
    };

    match run(&args, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            match &err {
                CliError::Request(params_err) => {
                    log!(warn, "request rejected", error: err, fields: params_err.fields().join(","));
                },
                _ => log!(error, "invalid arguments", error: err),
            }
            ExitCode::from(err.exit_status())
        },
    }
}
