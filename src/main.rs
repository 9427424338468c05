use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use word_ladder_graph::report::{self, TraversalReport};
use word_ladder_graph::{mst, GraphError, Performance, Searcher, WordGraph};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "word-ladder-graph",
    about = "Builds a word-ladder graph and reports its largest component and MST weight"
)]
struct Opt {
    /// Word list, one word per line. Reads stdin if absent or "-".
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Log algorithm progress at debug level.
    #[structopt(short, long)]
    verbose: bool,

    /// Log filter, e.g. "trace" or "word_ladder_graph=debug".
    #[structopt(long)]
    log_level: Option<String>,

    /// Skip the minimum spanning tree.
    #[structopt(long)]
    no_mst: bool,
}

fn init_tracing(opt: &Opt) {
    let level = match (&opt.log_level, opt.verbose) {
        (Some(level), _) if level.contains('=') => level.clone(),
        (Some(level), _) => format!("word_ladder_graph={}", level),
        (None, true) => "word_ladder_graph=debug".to_string(),
        (None, false) => "word_ladder_graph=warn".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

fn load(input: Option<&PathBuf>) -> Result<WordGraph, GraphError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let mut reader = BufReader::new(File::open(path)?);
            WordGraph::from_reader(&mut reader)
        }
        _ => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            WordGraph::from_reader(&mut reader)
        }
    }
}

fn main() {
    let opt = Opt::from_args();
    init_tracing(&opt);

    let words = match load(opt.input.as_ref()) {
        Ok(words) => words,
        Err(err) => {
            error!(%err, "could not build graph");
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let mut failed = false;

    match words.statistics() {
        Ok(stats) => println!("{}", stats),
        Err(err) => {
            eprintln!("error: {}", err);
            failed = true;
        }
    }

    let searcher = Searcher::new(&words);
    let dfs = searcher.dfs();
    let bfs = searcher.bfs();

    println!();
    println!(
        "{}",
        TraversalReport {
            label: "DFS",
            traversal: &dfs,
            words: &words,
        }
    );
    println!();
    println!(
        "{}",
        TraversalReport {
            label: "BFS",
            traversal: &bfs,
            words: &words,
        }
    );
    println!();
    println!(
        "{}",
        report::performance_block(Performance::compare(dfs.elapsed, bfs.elapsed))
    );

    if !opt.no_mst {
        println!();
        match mst::prim(&words, &dfs.component) {
            Ok(tree) => println!("{}", report::mst_block(&tree)),
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
