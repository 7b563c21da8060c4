use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pathsmooth::rand::{draw_stroke, ReplayToken, StrokeCfg};
use pathsmooth::{smooth, InterpolationRequest, Method};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "pathsmooth")]
#[command(about = "Smooth point sequences into Bézier paths")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Simple,
    Hermite,
    CatmullRom,
}

#[derive(Subcommand)]
enum Action {
    /// Smooth a point file into a JSON segment list
    Smooth {
        #[arg(long, value_enum)]
        algo: Algo,
        /// Catmull-Rom parametrization exponent in [0, 1]
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
        #[arg(long)]
        closed: bool,
        /// `.json` array of {x, y} or `.csv` with x and y columns
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Also write the path flattened with this many samples per curve
        #[arg(long)]
        samples: Option<usize>,
    },
    /// Write a reproducible drawing-like point sequence
    Sample {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10.0)]
        step: f64,
        /// Points on a jittered ring instead of an open walk
        #[arg(long)]
        ring: bool,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

struct SmoothArgs {
    algo: Algo,
    alpha: f64,
    closed: bool,
    input: String,
    out: String,
    samples: Option<usize>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Smooth {
            algo,
            alpha,
            closed,
            input,
            out,
            samples,
        } => run_smooth(SmoothArgs {
            algo,
            alpha,
            closed,
            input,
            out,
            samples,
        }),
        Action::Sample {
            count,
            seed,
            index,
            step,
            ring,
            out,
        } => {
            let cfg = StrokeCfg {
                point_count: count,
                step,
                closed_loop: ring,
                ..StrokeCfg::default()
            };
            run_sample(cfg, ReplayToken::new(seed, index), &out)
        }
        Action::Report => report(),
    }
}

fn method_for(algo: Algo, alpha: f64) -> Method {
    match algo {
        Algo::Simple => Method::Simple,
        Algo::Hermite => Method::Hermite,
        Algo::CatmullRom => Method::CatmullRom { alpha },
    }
}

fn run_smooth(args: SmoothArgs) -> Result<()> {
    tracing::info!(
        algo = ?args.algo,
        alpha = args.alpha,
        closed = args.closed,
        input = %args.input,
        out = %args.out,
        "smooth"
    );
    let points = io::read_points(&args.input)?;
    let req = InterpolationRequest::new(points, method_for(args.algo, args.alpha))
        .closed(args.closed);
    let path = smooth(&req)?;
    tracing::info!(
        points = req.points.len(),
        segments = path.len(),
        "smoothed"
    );
    io::write_json(&args.out, &io::PathDoc::new(&path, args.samples))?;

    let payload = provenance::Payload::new(json!({
        "algo": format!("{:?}", args.algo),
        "alpha": args.alpha,
        "closed": args.closed,
        "samples": args.samples,
    }))
    .with_input(args.input.as_str());
    provenance::write_sidecar(&args.out, payload)?;
    Ok(())
}

fn run_sample(cfg: StrokeCfg, tok: ReplayToken, out: &str) -> Result<()> {
    tracing::info!(count = cfg.point_count, seed = tok.seed, index = tok.index, out, "sample");
    let points = draw_stroke(cfg, tok);
    io::write_points(out, &points)?;
    let payload = provenance::Payload::new(json!({
        "count": cfg.point_count,
        "seed": tok.seed,
        "index": tok.index,
        "step": cfg.step,
        "ring": cfg.closed_loop,
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "pathsmooth_version": pathsmooth::VERSION,
        "algos": ["simple", "hermite", "catmull-rom"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
