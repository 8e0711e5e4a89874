use boletolib::{
    error::{BoletoError, Result},
    formats::{csv::Csv, json::Json, lines::Lines, xml::SimpleXml},
    inspect,
    traits::{ReadCodes, WriteReport},
};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InFmt {
    Lines,
    Csv,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutFmt {
    Csv,
    Xml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "boleto", version, about = "Разбор и проверка кодов boleto")]
struct Cli {
    /// Коды (штрихкод или цифровая строка); если не заданы — читаются из --input/stdin
    codes: Vec<String>,

    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат входа
    #[arg(long = "in-format", value_enum, default_value = "lines")]
    in_format: InFmt,

    /// Формат отчёта
    #[arg(long = "out-format", value_enum, default_value = "json")]
    out_format: OutFmt,

    /// Только валидные коды
    #[arg(long = "only-valid")]
    only_valid: bool,
}

/// Фильтр логов из значения RUST_LOG; `warn`, если переменная не задана или не разбирается.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    // логи в stderr, чтобы не смешивать с отчётом
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let codes = if cli.codes.is_empty() {
        let reader: Box<dyn io::Read> = match &cli.input {
            Some(path) => Box::new(File::open(path)?),
            None => Box::new(io::stdin()),
        };
        let br = BufReader::new(reader);
        match cli.in_format {
            InFmt::Lines => Lines::read(br),
            InFmt::Csv => Csv::read(br),
        }?
    } else {
        cli.codes.clone()
    };
    debug!(count = codes.len(), "codes to inspect");

    let mut report: Vec<_> = codes.iter().map(|c| inspect(c)).collect();
    let invalid = report.iter().filter(|i| !i.valid).count();
    info!(total = report.len(), invalid, "inspection done");
    if cli.only_valid {
        report.retain(|i| i.valid);
    }

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        OutFmt::Csv => Csv::write(&mut writer, &report),
        OutFmt::Xml => SimpleXml::write(&mut writer, &report),
        OutFmt::Json => Json::write(&mut writer, &report),
    }?;

    writer.flush().map_err(BoletoError::from)
}
