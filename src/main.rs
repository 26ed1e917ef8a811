use clap::{Parser, ValueEnum};
use folio::pipeline::DEFAULT_STYLE;
use folio::{
    ExportError, GeneratorBuilder, PdfExporter, Purpose, ReportGenerator, ReportOptions, load_input,
};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PurposeArg {
    Executive,
    Analyst,
    Dashboard,
    Storytelling,
    Comparison,
}

impl From<PurposeArg> for Purpose {
    fn from(arg: PurposeArg) -> Self {
        match arg {
            PurposeArg::Executive => Purpose::Executive,
            PurposeArg::Analyst => Purpose::Analyst,
            PurposeArg::Dashboard => Purpose::Dashboard,
            PurposeArg::Storytelling => Purpose::Storytelling,
            PurposeArg::Comparison => Purpose::Comparison,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    /// The adapted model, profile, layout and design instead of a document.
    Json,
    /// HTML converted by an external command.
    Pdf,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Pdf => "pdf",
        }
    }
}

/// Compose a self-contained HTML report from loosely structured JSON.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// JSON input files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Report title.
    #[arg(short, long)]
    title: String,

    #[arg(short, long, value_enum, default_value_t = PurposeArg::Executive)]
    purpose: PurposeArg,

    /// Writing style label.
    #[arg(short, long, default_value = DEFAULT_STYLE)]
    style: String,

    /// Output file for a single input. Defaults to `report.<format>`.
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Output directory for multiple inputs; files are named after each input.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Directory with catalog JSON files overriding the built-in tables.
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// External HTML-to-PDF command, called as `<command> <html> <pdf>`.
    #[arg(long, env = "FOLIO_PDF_COMMAND")]
    pdf_command: Option<String>,
}

impl Cli {
    fn options(&self) -> ReportOptions {
        ReportOptions::new(&self.title)
            .with_purpose(Purpose::from(self.purpose).as_str())
            .with_style(&self.style)
    }

    /// Output path for each input, in input order.
    fn targets(&self) -> Vec<PathBuf> {
        let extension = self.format.extension();
        if self.inputs.len() == 1 && self.out_dir.is_none() {
            let path = self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("report.{extension}")));
            return vec![path];
        }
        let dir = self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        self.inputs
            .iter()
            .map(|input| {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "report".to_string());
                dir.join(format!("{stem}.{extension}"))
            })
            .collect()
    }
}

/// Rejects target lists where one report would overwrite another.
fn check_targets(targets: &[PathBuf], format: OutputFormat) -> Result<(), String> {
    let mut seen = HashSet::new();
    if let Some(clash) = targets.iter().find(|target| !seen.insert(*target)) {
        return Err(format!(
            "Several inputs would be written to {}; give them distinct file names",
            clash.display()
        ));
    }
    if format == OutputFormat::Pdf {
        let is_html = |t: &&PathBuf| t.extension().is_some_and(|e| e.eq_ignore_ascii_case("html"));
        if let Some(target) = targets.iter().find(is_html) {
            return Err(format!(
                "PDF target {} would overwrite its own HTML source",
                target.display()
            ));
        }
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.inputs.len() > 1 && cli.output.is_some() {
        return Err("--output takes a single input; use --out-dir for several".into());
    }

    let targets = cli.targets();
    check_targets(&targets, cli.format)?;

    let mut builder = GeneratorBuilder::new();
    if let Some(dir) = &cli.catalog_dir {
        builder = builder.with_catalog_dir(dir);
    }
    let generator = builder.build()?;

    let options = cli.options();
    let values = cli
        .inputs
        .iter()
        .map(load_input)
        .collect::<Result<Vec<_>, _>>()?;

    match cli.format {
        OutputFormat::Json => {
            for (value, target) in values.iter().zip(&targets) {
                let snapshot = generator.inspect(value, &options);
                write_output(target, &serde_json::to_string_pretty(&snapshot)?)?;
                println!("Wrote {}", target.display());
            }
            Ok(())
        }
        OutputFormat::Html => {
            for (html, target) in render_all(&generator, values, &options)?.iter().zip(&targets) {
                write_output(target, html)?;
                println!("Wrote {}", target.display());
            }
            Ok(())
        }
        OutputFormat::Pdf => {
            let exporter = match &cli.pdf_command {
                Some(line) => PdfExporter::from_command_line(line),
                None => Err(ExportError::NotConfigured),
            };
            for (html, target) in render_all(&generator, values, &options)?.iter().zip(&targets) {
                let html_path = target.with_extension("html");
                write_output(&html_path, html)?;
                println!("Wrote {}", html_path.display());

                let kept = |e: &ExportError| format!("{e} (HTML kept at {})", html_path.display());
                match &exporter {
                    Ok(exporter) => exporter
                        .export(&html_path, target)
                        .map_err(|e| kept(&e))?,
                    Err(e) => return Err(kept(e).into()),
                }
                println!("Wrote {}", target.display());
            }
            Ok(())
        }
    }
}

fn render_all(
    generator: &ReportGenerator,
    values: Vec<serde_json::Value>,
    options: &ReportOptions,
) -> Result<Vec<String>, folio::GenerateError> {
    if values.len() == 1 {
        return values
            .iter()
            .map(|value| generator.generate(value, options))
            .collect();
    }
    let jobs = values.into_iter().map(|v| (v, options.clone())).collect();
    generator.generate_batch(jobs).into_iter().collect()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
