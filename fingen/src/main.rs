use clap::{Parser, ValueEnum};
use fingenlib::{
    error::Result,
    formats::{csv::Csv, xml::Xml},
    sampler::Sampler,
    traits::WriteFormat,
};
use std::fs::File;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Xml,
    Csv,
}

impl Fmt {
    fn extension(self) -> &'static str {
        match self {
            Fmt::Xml => "xml",
            Fmt::Csv => "csv",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fingen", version, about = "Генерация синтетических банковских выписок")]
struct Cli {
    /// Сколько выписок сгенерировать
    count: usize,

    /// Выходной файл (по умолчанию bank_statements_{N}.xml)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат выхода
    #[arg(long = "format", value_enum, default_value_t = Fmt::Xml)]
    format: Fmt,

    /// Зерно ГПСЧ (воспроизводимый набор)
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger();
    debug!("{cli:?}");

    let mut sampler = match cli.seed {
        Some(seed) => Sampler::with_seed(seed),
        None => Sampler::new(),
    };
    let statements = sampler.sample_dataset(cli.count);
    debug!("sampled {} statements", statements.len());

    let file_name = cli
        .output
        .unwrap_or_else(|| format!("bank_statements_{}.{}", cli.count, cli.format.extension()));

    let mut writer = File::create(&file_name)?;
    match cli.format {
        Fmt::Xml => Xml::write(&mut writer, &statements),
        Fmt::Csv => Csv::write(&mut writer, &statements),
    }?;
    writer.flush()?;

    info!("dataset written to {file_name}");
    println!("Dataset '{file_name}' has been generated.");
    Ok(())
}

fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG задан — используем его
        Some(_) => EnvFilter::from_default_env(),
        // иначе пишем только предупреждения, чтобы не мешать выводу CLI
        None => EnvFilter::default().add_directive(LevelFilter::WARN.into()),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
