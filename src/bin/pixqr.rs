use clap::{Args, Parser, Subcommand};
use pix_qr::encoder::QrBuilder;
use pix_qr::render::{SvgOptions, render_svg};
use pix_qr::{ECLevel, EncodeOptions, MaskPattern, PixFields, Version, config};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "pixqr", version, about = "PIX payload and QR Code SVG generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text as a QR Code SVG
    Encode {
        #[arg(long)]
        text: String,
        #[command(flatten)]
        symbol: SymbolArgs,
        #[command(flatten)]
        svg: SvgArgs,
        /// Print a data URI instead of the raw document
        #[arg(long)]
        base64: bool,
    },
    /// Build a PIX "Copia e Cola" payload
    Pix {
        #[arg(long)]
        key: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        txid: Option<String>,
        /// Also print the QR Code SVG
        #[arg(long)]
        svg: bool,
        #[command(flatten)]
        symbol: SymbolArgs,
        #[command(flatten)]
        svg_options: SvgArgs,
    },
    /// Print version, mask penalties and the module matrix for some text
    Inspect {
        #[arg(long)]
        text: String,
        #[command(flatten)]
        symbol: SymbolArgs,
    },
}

#[derive(Args)]
struct SymbolArgs {
    /// Error correction level (L, M, Q or H)
    #[arg(long)]
    ec_level: Option<ECLevel>,
    /// Symbol version 1-40 (default: smallest that fits)
    #[arg(long)]
    version: Option<u8>,
    /// Mask pattern 0-7 (default: lowest penalty)
    #[arg(long)]
    mask: Option<u8>,
}

#[derive(Args)]
struct SvgArgs {
    #[arg(long)]
    cell_size: Option<usize>,
    #[arg(long)]
    margin: Option<usize>,
    #[arg(long)]
    dark: Option<String>,
    #[arg(long)]
    light: Option<String>,
}

impl SymbolArgs {
    fn options(&self, svg: SvgOptions) -> pix_qr::Result<EncodeOptions> {
        Ok(EncodeOptions {
            ec_level: self.ec_level.unwrap_or_else(config::default_ec_level),
            version: self.version.map(Version::new).transpose()?,
            mask: self.mask.map(MaskPattern::new).transpose()?,
            svg,
        })
    }
}

impl SvgArgs {
    fn options(&self) -> SvgOptions {
        let mut options = SvgOptions::default();
        if let Some(cell_size) = self.cell_size {
            options = options.with_cell_size(cell_size);
        }
        if let Some(margin) = self.margin {
            options = options.with_margin(margin);
        }
        if let Some(dark) = &self.dark {
            options.dark_color = dark.clone();
        }
        if let Some(light) = &self.light {
            options.light_color = light.clone();
        }
        options
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> pix_qr::Result<()> {
    match command {
        Command::Encode {
            text,
            symbol,
            svg,
            base64,
        } => {
            let options = symbol.options(svg.options())?;
            let output = if base64 {
                pix_qr::encode_svg_base64(&text, &options)?
            } else {
                pix_qr::encode_svg(&text, &options)?
            };
            println!("{output}");
        }
        Command::Pix {
            key,
            name,
            city,
            description,
            amount,
            txid,
            svg,
            symbol,
            svg_options,
        } => {
            let fields = PixFields {
                pix_key: key,
                merchant_name: name,
                merchant_city: city,
                description,
                amount,
                txid,
            };
            if svg {
                let options = symbol.options(svg_options.options())?;
                let code = pix_qr::generate_pix_qr(&fields, &options)?;
                println!("{}", code.payload);
                println!("{}", code.svg);
            } else {
                println!("{}", pix_qr::build_pix_payload(&fields)?);
            }
        }
        Command::Inspect { text, symbol } => inspect_cmd(&text, &symbol)?,
    }
    Ok(())
}

fn inspect_cmd(text: &str, args: &SymbolArgs) -> pix_qr::Result<()> {
    let options = args.options(SvgOptions::default())?;
    let mut builder = QrBuilder::new(options.ec_level);
    if let Some(version) = options.version {
        builder = builder.with_version(version);
    }
    if let Some(mask) = options.mask {
        builder = builder.with_mask(mask);
    }
    builder.add_data(text);

    let scores = builder.mask_scores()?;
    let symbol = builder.build()?;
    println!(
        "version={} size={} ec_level={:?} mask={} bytes={}",
        symbol.version(),
        symbol.size(),
        symbol.error_correction(),
        symbol.mask_pattern().index(),
        text.len()
    );
    for (mask, score) in MaskPattern::ALL.iter().zip(&scores) {
        let marker = if *mask == symbol.mask_pattern() { "*" } else { " " };
        println!(
            "{marker} mask {}: total={:>5} runs={:>4} blocks={:>4} finder_like={:>4} balance={:>3}",
            mask.index(),
            score.total(),
            score.runs,
            score.blocks,
            score.finder_like,
            score.balance
        );
    }
    print!("{}", symbol.to_text());
    println!("dark modules: {}", symbol.dark_count());
    println!(
        "svg bytes at default options: {}",
        render_svg(&symbol, &options.svg).len()
    );
    Ok(())
}
