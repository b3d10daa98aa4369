use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;

use frame_search::{
    parse::parse_relation,
    render::{
        render_elements, render_quadruples, render_relation, render_subsets, render_summary,
        render_table,
    },
};
use rmframe::{
    axioms,
    closure::{closed_subsets, closure, is_closed},
    par_search_frames, search_frames, Carrier, Element, ElementSet, Frame,
};

const DEFAULT_N: usize = 3;
const DEFAULT_DEMO_TRIES: usize = 100_000;
const DEFAULT_SHOW: usize = 10;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the subset enumeration order; drawn from entropy when absent.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// -v for summaries, -vv for accepted frames, -vvv for every discarded candidate.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FrameArgs {
    /// Size of S = {0, …, n−1}.
    #[arg(short)]
    n: usize,

    /// The distinguished set P, comma separated (`-p 0,1`).
    #[arg(short = 'p', long = "distinguished", value_delimiter = ',')]
    distinguished: Vec<Element>,

    /// The relation R, as triples `abc` or `a,b,c` separated by spaces or semicolons.
    #[arg(short = 'r', long = "relation", default_value = "")]
    relation: String,
}

#[derive(Subcommand)]
enum Command {
    /// Show the reference frame, its closed subsets and compositions, then run a bounded search.
    Demo {
        #[arg(short, long, default_value_t = DEFAULT_DEMO_TRIES)]
        tries: usize,
    },
    /// Validate a frame and print its table and closed subsets.
    Check(FrameArgs),
    /// Enumerate candidate (R, P) pairs over S and keep the frames.
    Search {
        #[arg(short, default_value_t = DEFAULT_N)]
        n: usize,

        /// Stop after this many attempts; exhaustive when absent.
        #[arg(short, long)]
        tries: Option<usize>,

        #[arg(long)]
        parallel: bool,

        /// Number of found frames to print.
        #[arg(long, default_value_t = DEFAULT_SHOW)]
        show: usize,
    },
    /// Print the closure of a subset of S.
    Closure {
        #[command(flatten)]
        frame: FrameArgs,

        #[arg(value_delimiter = ',')]
        subset: Vec<Element>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match args.command {
        Command::Demo { tries } => demo(tries, &mut rng),
        Command::Check(frame) => check(&frame, &mut rng),
        Command::Search {
            n,
            tries,
            parallel,
            show,
        } => search(n, tries, parallel, show, &mut rng),
        Command::Closure { frame, subset } => print_closure(&frame, subset),
    }
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("failed to initialize the logger")
}

fn build_frame(args: &FrameArgs) -> anyhow::Result<Frame> {
    let relation = parse_relation(&args.relation)?;
    match Frame::new(
        relation.iter().copied(),
        args.distinguished.iter().copied(),
        args.n,
    ) {
        Ok(frame) => Ok(frame),
        Err(err) => {
            if let (Some(_), Ok(carrier)) = (err.counterexample(), Carrier::new(args.n)) {
                let violations = axioms::violations(
                    &relation.iter().copied().collect(),
                    &args.distinguished.iter().copied().collect(),
                    carrier,
                );
                eprintln!("{}", "Failing axioms:".red().bold());
                for counterexample in violations {
                    eprintln!("  {}", counterexample);
                }
            }
            Err(err).context("not a frame")
        }
    }
}

fn print_closed_subsets(frame: &Frame, rng: &mut StdRng) {
    let mut closed = closed_subsets(frame, rng);
    closed.sort();
    println!("{}", render_subsets(&closed));
}

fn demo(tries: usize, rng: &mut StdRng) -> anyhow::Result<()> {
    let frame = Frame::reference();
    println!("{}", "Example of a frame:".bold());
    println!("Attribute P: {}", render_elements(frame.distinguished()));
    println!(
        "Attribute S: {}",
        render_elements(&frame.carrier().elements().collect::<Vec<_>>())
    );
    println!("Attribute R: {}", render_relation(frame.relation()));
    println!();
    println!("{}", "Example of the relation table:".bold());
    print!("{}", render_table(&frame.table()));
    println!();
    println!("{}", "Example of closed subsets:".bold());
    print_closed_subsets(&frame, rng);
    println!();
    println!("{}", "Example of composed relations:".bold());
    println!("R²abcd:   {}", render_quadruples(&frame.compose1_quadruples()));
    println!("R²a(bc)d: {}", render_quadruples(&frame.compose2_quadruples()));
    println!();
    println!("{}", "Example of a search:".bold());
    search(DEFAULT_N, Some(tries), true, DEFAULT_SHOW, rng)
}

fn check(args: &FrameArgs, rng: &mut StdRng) -> anyhow::Result<()> {
    let frame = build_frame(args)?;
    println!("{}", "This is a frame.".green().bold());
    print!("{}", render_table(&frame.table()));
    println!("{}", "Closed subsets:".bold());
    print_closed_subsets(&frame, rng);
    Ok(())
}

fn search(
    n: usize,
    tries: Option<usize>,
    parallel: bool,
    show: usize,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let outcome = if parallel {
        par_search_frames(n, tries, rng)
    } else {
        search_frames(n, tries, rng)
    }
    .context("search failed")?;
    println!("{}", render_summary(&outcome).green().bold());
    for frame in outcome.frames.iter().take(show) {
        println!();
        print!("{}", render_table(&frame.table()));
    }
    if outcome.count() > show {
        println!();
        println!("... and {} more", outcome.count() - show);
    }
    Ok(())
}

fn print_closure(args: &FrameArgs, subset: Vec<Element>) -> anyhow::Result<()> {
    let frame = build_frame(args)?;
    let subset: ElementSet = subset.into_iter().collect();
    let closed = closure(&frame, &subset);
    println!(
        "closure({}) = {}",
        render_elements(&subset),
        render_elements(&closed)
    );
    if is_closed(&frame, &subset) {
        println!("{}", "The subset is closed.".green());
    } else {
        println!("{}", "The subset is not closed.".yellow());
    }
    Ok(())
}
