#[cfg(feature = "cairo-backend")]
use chrono::NaiveDate;
#[cfg(feature = "cairo-backend")]
use commit_heatmap::api::{
    AuthorizationGate, HeatmapEngine, HeatmapEngineConfig, HeatmapPayload, PendingSwitch,
};
#[cfg(feature = "cairo-backend")]
use commit_heatmap::core::{Granularity, Locale, Viewport};
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    payload_path: PathBuf,
    output_path: PathBuf,
    granularity: Granularity,
    locale: Locale,
    width: u32,
    height: u32,
    today: Option<NaiveDate>,
}

/// Offline rendering has no login flow: the daily view is always allowed.
#[cfg(feature = "cairo-backend")]
struct OfflineGate;

#[cfg(feature = "cairo-backend")]
impl AuthorizationGate for OfflineGate {
    fn is_authorized(&self) -> bool {
        true
    }

    fn request_authentication(&mut self, _pending: PendingSwitch) {}
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use commit_heatmap::render::CairoRenderer;

    let _ = commit_heatmap::telemetry::init_default_tracing();

    let args = parse_args()?;
    let raw = fs::read_to_string(&args.payload_path).map_err(|err| {
        format!(
            "failed to read payload `{}`: {err}",
            args.payload_path.display()
        )
    })?;
    let payload = HeatmapPayload::from_json_str(&raw)
        .map_err(|err| format!("failed to decode payload: {err}"))?;

    let width = i32::try_from(args.width).map_err(|_| "width is too large".to_owned())?;
    let height = i32::try_from(args.height).map_err(|_| "height is too large".to_owned())?;
    let renderer = CairoRenderer::new(width, height)
        .map_err(|err| format!("failed to create cairo surface: {err}"))?;
    let config = HeatmapEngineConfig::new(Viewport::new(args.width, args.height))
        .with_locale(args.locale);
    let mut engine =
        HeatmapEngine::new(renderer, config).map_err(|err| format!("invalid config: {err}"))?;

    match args.today {
        Some(today) => engine.load_payload_at(payload, today),
        None => engine.load_payload(payload),
    }
    .map_err(|err| format!("failed to load payload: {err}"))?;
    engine
        .request_granularity(args.granularity, &mut OfflineGate)
        .map_err(|err| format!("failed to switch granularity: {err}"))?;
    engine
        .render()
        .map_err(|err| format!("render failed: {err}"))?;

    let renderer = engine.into_renderer();
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;
    println!("wrote {}", args.output_path.display());
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut payload_path: Option<PathBuf> = None;
    let mut output_path = PathBuf::from("heatmap.png");
    let mut granularity = Granularity::Weekly;
    let mut locale = Locale::Fr;
    let mut width = 900_u32;
    let mut height = 200_u32;
    let mut today = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--payload" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --payload".to_owned())?;
                payload_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--daily" => granularity = Granularity::Daily,
            "--en" => locale = Locale::En,
            "--width" => width = parse_dimension(args.next(), "--width")?,
            "--height" => height = parse_dimension(args.next(), "--height")?,
            "--today" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --today".to_owned())?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|err| format!("invalid --today `{value}`: {err}"))?;
                today = Some(date);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }

    Ok(CliArgs {
        payload_path: payload_path.ok_or_else(|| "missing required --payload".to_owned())?,
        output_path,
        granularity,
        locale,
        width,
        height,
        today,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{flag} must be a positive integer, got `{value}`")),
    }
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!(
        "usage: render_heatmap_png --payload <file.json> [--output <file.png>] [--daily] [--en] \
         [--width <px>] [--height <px>] [--today <YYYY-MM-DD>]"
    );
}
