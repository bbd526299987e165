//! Graph coloring experiment runner


// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

use clap::{App, ArgMatches, load_yaml};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use graph_coloring_bench::color::ColoringInstance;
use graph_coloring_bench::error::Result;
use graph_coloring_bench::experiment::run_experiment;
use graph_coloring_bench::util::{
    read_run_params, format_result_line, append_results_csv, experiment_stats, export_stats, summarize_csv,
};
use graph_coloring_bench::visualization::draw_graph;


/** runs the experiments described by the command line.
Failures while saving results are reported and do not stop the runs.
*/
fn run(args:&ArgMatches) -> Result<()> {
    let params = read_run_params(args)?;
    info!("admission policy: {:?}", params.policy);
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut all_stats:Vec<Value> = Vec::with_capacity(params.runs);
    for i in 0..params.runs {
        println!("=========================================================");
        println!("running experiment {} of {}...", i+1, params.runs);
        let inst = params.source.load(&mut rng)?;
        inst.display_statistics();
        let report = run_experiment(&inst, &params.policy);
        for (algorithm, result) in report.iter() {
            println!("{}", format_result_line(algorithm, result));
        }
        if let Some(filename) = &params.csv_file {
            match append_results_csv(filename, params.source.name(), inst.nb_vertices(), &report) {
                Ok(()) => info!("results saved in {}", filename),
                Err(e) => error!("failed to save results in {}: {}", filename, e),
            }
        }
        all_stats.push(experiment_stats(params.source.name(), i, &report));
        // only the first run is rendered
        if i == 0 {
            if let Some(dir) = &params.plot_dir {
                for (algorithm, result) in report.iter() {
                    let title = format!("{} Coloring", algorithm);
                    if let Err(e) = draw_graph(&inst, result.coloring(), &title, dir) {
                        error!("failed to draw {}: {}", title, e);
                    }
                }
            }
        }
    }
    if let Some(filename) = &params.perf_file {
        if let Err(e) = export_stats(filename, &Value::Array(all_stats)) {
            error!("failed to write statistics in {}: {}", filename, e);
        }
    }
    Ok(())
}

/** prints the average colors and time of each algorithm per graph type */
fn summary(args:&ArgMatches) -> Result<()> {
    let filename = args.value_of("csv").unwrap_or("results/graph_coloring_results.csv");
    let rows = summarize_csv(filename)?;
    println!("{:10} | {:15} | {:>5} | {:>8} | {:>12}", "GraphType", "Algorithm", "Runs", "Colors", "Time (sec)");
    for row in rows {
        println!("{:10} | {:15} | {:>5} | {:>8.2} | {:>12.6}",
            row.graph_type, row.algorithm, row.nb_runs, row.mean_colors, row.mean_time
        );
    }
    Ok(())
}

/**
reads the command line, then runs the experiments or summarizes a results file.
*/
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let res = match main_args.subcommand() {
        ("run", Some(args)) => run(args),
        ("summary", Some(args)) => summary(args),
        (name, _) => {
            error!("unknown command '{}' (valid: run, summary)", name);
            std::process::exit(2);
        }
    };
    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
