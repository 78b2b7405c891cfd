use clap::Parser;
use image_url_optimizer::config::OptimizerConfig;
use image_url_optimizer::logging::{init_subscriber, LogFormat};
use image_url_optimizer::{ImageUrlOptimizer, SizePreset, TransformRequest};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Rewrite Cloudinary image URLs to request optimized variants
///
/// Reads URLs from the arguments, or one per line from stdin when none are
/// given, and prints one rewritten URL per line.
#[derive(Parser, Debug)]
#[command(name = "image-url-optimizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Target height in pixels (crops to fill)
    #[arg(long)]
    height: Option<u32>,

    /// Quality token, e.g. auto, auto:good, 80
    #[arg(short, long)]
    quality: Option<String>,

    /// Format token, e.g. auto, webp, avif
    #[arg(short, long)]
    format: Option<String>,

    /// Size preset (overrides --width)
    #[arg(short, long)]
    size: Option<SizePreset>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// URLs to rewrite
    urls: Vec<String>,
}

impl Args {
    fn request(&self, optimizer: &ImageUrlOptimizer) -> TransformRequest {
        let mut request = optimizer.default_request();

        if let Some(preset) = self.size {
            request.width = optimizer.config().presets.width(preset);
        } else if let Some(width) = self.width {
            request.width = width;
        }
        request.height = self.height;
        if let Some(quality) = &self.quality {
            request.quality = quality.clone();
        }
        if let Some(format) = &self.format {
            request.format = format.as_str().into();
        }

        request
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_subscriber(args.log_format) {
        eprintln!("{}", e);
    }

    let config = match &args.config {
        Some(path) => OptimizerConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }),
        None => OptimizerConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing::debug!(
        config_file = ?args.config,
        host_marker = %config.host_marker,
        upload_marker = %config.upload_marker,
        "Configuration loaded successfully"
    );

    let optimizer = ImageUrlOptimizer::new(config);
    let request = args.request(&optimizer);

    if let Err(e) = run(&args, &optimizer, &request) {
        tracing::error!(error = %e, "Failed to write output");
        std::process::exit(1);
    }
}

fn run(args: &Args, optimizer: &ImageUrlOptimizer, request: &TransformRequest) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", optimizer.optimize(Some(line.trim()), request))?;
        }
    } else {
        for url in &args.urls {
            writeln!(out, "{}", optimizer.optimize(Some(url), request))?;
        }
    }

    out.flush()
}
