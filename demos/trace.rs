//! Trace stippler SVG output into toolpaths and print them as SVG
use std::{
    env,
    fs::File,
    io::{BufWriter, Read, Write},
};
use stipple_trace::*;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug)]
struct Args {
    input_file: String,
    output_file: String,
    scale: Scalar,
    overrides: Option<String>,
    host: HostSettings,
}

impl Args {
    fn parse() -> Result<Args, Error> {
        let mut result = Args {
            input_file: String::new(),
            output_file: String::new(),
            scale: 2.0,
            overrides: None,
            host: HostSettings::default(),
        };
        let mut positional = 0;
        let mut args = env::args();
        let cmd = args.next().unwrap_or_else(|| "trace".to_string());
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" => {
                    positional = 0;
                    break;
                }
                "-s" => {
                    result.scale = args.next().ok_or("-s requires argument")?.parse()?;
                }
                "-i" => {
                    let iteration = args.next().ok_or("-i requires argument")?;
                    result.host.autostrokeiteration = Some(iteration.parse()?);
                }
                "-w" => {
                    let width = args.next().ok_or("-w requires argument")?;
                    result.host.autostrokewidth = Some(width.parse()?);
                }
                "-c" => {
                    result.overrides = Some(args.next().ok_or("-c requires argument")?);
                }
                _ => {
                    positional += 1;
                    match positional {
                        1 => result.input_file = arg,
                        2 => result.output_file = arg,
                        _ => return Err("unexpected positional argment".into()),
                    }
                }
            }
        }
        if positional < 2 {
            eprintln!("Trace stippler SVG output into closed toolpaths");
            eprintln!("\nUSAGE:");
            eprintln!(
                "    {} [-s <scale>] [-i <iterations>] [-w <width>] [-c <json>] <stipples.svg> <out.svg>",
                cmd
            );
            eprintln!("\nARGS:");
            eprintln!("    -s <scale>         scale applied to stipple coordinates (default: 2)");
            eprintln!("    -i <iterations>    stipples traced per frame");
            eprintln!("    -w <width>         preview stroke width");
            eprintln!("    -c <json>          JSON object with trace overrides");
            eprintln!("    <stipples.svg>     stippler output ('-' means stdin)");
            eprintln!("    <out.svg>          traced toolpaths ('-' means stdout)");
            std::process::exit(1);
        }
        Ok(result)
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;

    let mut contents = String::new();
    if args.input_file != "-" {
        File::open(&args.input_file)?.read_to_string(&mut contents)?;
    } else {
        std::io::stdin().read_to_string(&mut contents)?;
    }
    let stipples = tracing::debug_span!("[parse]").in_scope(|| parse_stipples(&contents, args.scale))?;

    let mut overrides = match &args.overrides {
        Some(json) => TraceOverrides::from_json(json)?,
        None => TraceOverrides::default(),
    };
    overrides.stipples = stipples;

    let mut tracer = StippleTracer::default().with_host_settings(args.host);
    let mut canvas = LayeredCanvas::new();
    let mut status = TracingSink;
    let mut completion = tracer.setup(overrides, &mut canvas, &mut status)?;

    // stand-in for the host render loop
    let mut frames = 0usize;
    let summary = loop {
        tracer.step(&mut canvas, &mut status);
        frames += 1;
        match completion.poll() {
            Some(TraceOutcome::Completed(summary)) => break summary,
            Some(TraceOutcome::Cancelled) => return Err("trace was cancelled".into()),
            None => continue,
        }
    };
    tracing::info!(
        "[done] frames={} traced={} skipped={}",
        frames,
        summary.traced,
        summary.skipped
    );

    let svg = canvas.layer(LayerKind::Action).to_svg();
    if args.output_file != "-" {
        let mut file = BufWriter::new(File::create(&args.output_file)?);
        file.write_all(svg.as_bytes())?;
        file.flush()?;
    } else {
        std::io::stdout().write_all(svg.as_bytes())?;
    }
    Ok(())
}
