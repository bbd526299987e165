use std::fs::{self, OpenOptions};
use std::path::Path;
use std::str::FromStr;

use clap::ArgMatches;
use log::{debug, info};
use rand::Rng;
use serde::{Serialize, Deserialize};
use serde_json::{json, Value};

use crate::compact_instance::CompactInstance;
use crate::config::AdmissionPolicy;
use crate::error::{ColoringError, Result};
use crate::experiment::{Algorithm, ExperimentReport, ExperimentResult};
use crate::generators::GraphType;

/** where the graphs of an experiment come from */
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// a new graph is generated for each run
    Generated(GraphType),
    /// the same DIMACS instance is read for each run
    Dimacs(String),
}

impl GraphSource {
    /// name stored in the GraphType column of the results
    pub fn name(&self) -> &str {
        match self {
            GraphSource::Generated(t) => t.name(),
            GraphSource::Dimacs(_) => "dimacs",
        }
    }

    /// builds the instance of a run
    pub fn load<R:Rng>(&self, rng:&mut R) -> Result<CompactInstance> {
        match self {
            GraphSource::Generated(t) => t.generate(rng),
            GraphSource::Dimacs(filename) => CompactInstance::from_file(filename),
        }
    }
}

/** parameters of the run command */
#[derive(Debug, Clone)]
pub struct RunParams {
    /// graphs to color
    pub source: GraphSource,
    /// number of experiments
    pub runs: usize,
    /// seed of the random generator (None: from entropy)
    pub seed: Option<u64>,
    /// results store (appended)
    pub csv_file: Option<String>,
    /// JSON statistics file
    pub perf_file: Option<String>,
    /// directory of the DOT renderings
    pub plot_dir: Option<String>,
    /// thresholds of the exact solvers
    pub policy: AdmissionPolicy,
}

/// parses an optional numeric argument
fn parse_arg<T:FromStr>(args:&ArgMatches, name:&str) -> Result<Option<T>> {
    match args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_|
            ColoringError::InvalidParameter(format!("unable to parse --{} '{}'", name, s))
        ),
    }
}

/** reads the command line of the run command */
pub fn read_run_params(args:&ArgMatches) -> Result<RunParams> {
    let graph_type = args.value_of("type").unwrap_or("random");
    let source = if graph_type == "dimacs" {
        match args.value_of("instance") {
            Some(filename) => GraphSource::Dimacs(filename.to_string()),
            None => return Err(ColoringError::InvalidParameter(
                "--instance is required with --type dimacs".to_string()
            )),
        }
    } else {
        GraphSource::Generated(GraphType::from_name(
            graph_type,
            parse_arg(args, "nodes")?,
            parse_arg(args, "prob")?,
            parse_arg(args, "width")?,
            parse_arg(args, "height")?,
        )?)
    };
    // admission policy: file or preset, then individual overrides
    let mut policy = match args.value_of("config") {
        Some(filename) => {
            info!("reading admission policy from: {}", filename);
            AdmissionPolicy::from_file(filename)?
        },
        None if args.is_present("relaxed") => AdmissionPolicy::relaxed(),
        None => AdmissionPolicy::default(),
    };
    if let Some(t) = parse_arg(args, "bf-max")? { policy.brute_force_max_vertices = t; }
    if let Some(t) = parse_arg(args, "bt-max")? { policy.backtracking_max_vertices = t; }
    policy.validate()?;
    let res = RunParams {
        source,
        runs: parse_arg(args, "runs")?.unwrap_or(1),
        seed: parse_arg(args, "seed")?,
        csv_file: args.value_of("csv").map(|s| s.to_string()),
        perf_file: args.value_of("perf").map(|s| s.to_string()),
        plot_dir: args.value_of("plot").map(|s| s.to_string()),
        policy,
    };
    if let Some(e) = &res.csv_file { info!("saving results in: {}", e); }
    if let Some(e) = &res.perf_file { info!("printing perfs in: {}", e); }
    Ok(res)
}

/// one line of the result table printed after each run
pub fn format_result_line(algorithm:Algorithm, result:&ExperimentResult) -> String {
    match result {
        ExperimentResult::Completed { colors, time, .. } => {
            format!("{:15} | Colors: {} | Time: {:.6} sec", algorithm.name(), colors, time)
        },
        ExperimentResult::Skipped => {
            format!("{:15} | Colors: N/A | Time: N/A (skipped)", algorithm.name())
        },
    }
}

/** row of the results store */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// graph family
    #[serde(rename = "GraphType")]
    pub graph_type: String,
    /// number of vertices
    #[serde(rename = "Size")]
    pub size: usize,
    /// algorithm display name
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    /// number of colors (empty if skipped)
    #[serde(rename = "Colors")]
    pub colors: Option<usize>,
    /// time in seconds (empty if skipped)
    #[serde(rename = "Time")]
    pub time: Option<f64>,
}

/// rows of the results store for a report
pub fn report_records(graph_type:&str, size:usize, report:&ExperimentReport) -> Vec<ResultRecord> {
    report.iter().map(|(algorithm, result)| ResultRecord {
        graph_type: graph_type.to_string(),
        size,
        algorithm: algorithm.name().to_string(),
        colors: result.colors(),
        time: result.time(),
    }).collect()
}

/** appends the results of a report to a CSV file.
The header is only written if the file is created (or empty).
*/
pub fn append_results_csv(filename:&str, graph_type:&str, size:usize, report:&ExperimentReport) -> Result<()> {
    let path = Path::new(filename);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { fs::create_dir_all(dir)?; }
    }
    let is_new = !path.exists() || fs::metadata(path)?.len() == 0;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    for record in report_records(graph_type, size, report) {
        debug!("saved: {:?}", record);
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// reads every row of a results store
pub fn read_results_csv(filename:&str) -> Result<Vec<ResultRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(filename)?;
    let mut res = Vec::new();
    for record in reader.deserialize() {
        res.push(record?);
    }
    Ok(res)
}

/** aggregated results of an algorithm on a graph family */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// graph family
    pub graph_type: String,
    /// algorithm display name
    pub algorithm: String,
    /// number of runs aggregated
    pub nb_runs: usize,
    /// average number of colors
    pub mean_colors: f64,
    /// average time (seconds)
    pub mean_time: f64,
}

/** averages colors and time per (graph type, algorithm).
Rows with missing values (skipped solvers) are dropped.
Result sorted by graph type, algorithms in order of first appearance.
*/
pub fn summarize(records:&[ResultRecord]) -> Vec<SummaryRow> {
    let mut res:Vec<SummaryRow> = Vec::new();
    for r in records {
        let (colors, time) = match (r.colors, r.time) {
            (Some(c), Some(t)) => (c, t),
            _ => continue,
        };
        let pos = res.iter().position(|s| s.graph_type == r.graph_type && s.algorithm == r.algorithm);
        let row = match pos {
            Some(i) => &mut res[i],
            None => {
                res.push(SummaryRow {
                    graph_type: r.graph_type.clone(),
                    algorithm: r.algorithm.clone(),
                    nb_runs: 0,
                    mean_colors: 0.,
                    mean_time: 0.,
                });
                let last = res.len()-1;
                &mut res[last]
            }
        };
        // running means
        row.nb_runs += 1;
        row.mean_colors += (colors as f64 - row.mean_colors) / row.nb_runs as f64;
        row.mean_time += (time - row.mean_time) / row.nb_runs as f64;
    }
    res.sort_by(|a,b| a.graph_type.cmp(&b.graph_type));
    res
}

/// reads a results store and aggregates it
pub fn summarize_csv(filename:&str) -> Result<Vec<SummaryRow>> {
    Ok(summarize(&read_results_csv(filename)?))
}

/// statistics of a run, as exported in the perf file
pub fn experiment_stats(graph_type:&str, run:usize, report:&ExperimentReport) -> Value {
    json!({
        "graph_type": graph_type,
        "size": report.nb_vertices,
        "run": run,
        "results": report.runs,
    })
}

/// writes statistics in a JSON file
pub fn export_stats(filename:&str, stats:&Value) -> Result<()> {
    if let Some(dir) = Path::new(filename).parent() {
        if !dir.as_os_str().is_empty() { fs::create_dir_all(dir)?; }
    }
    fs::write(filename, serde_json::to_string_pretty(stats)?)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crate::compact_instance::CompactInstance;
    use crate::experiment::run_experiment;

    fn tmp_file(name:&str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("coloring_bench_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let res = dir.join(name);
        let _ = fs::remove_file(&res);
        res
    }

    fn nine_cycle_report() -> ExperimentReport {
        let edges:Vec<(usize,usize)> = (0..9).map(|i| (i, (i+1)%9)).collect();
        let inst = CompactInstance::from_edges(9, &edges).unwrap();
        run_experiment(&inst, &AdmissionPolicy::default())
    }

    #[test]
    fn test_format_result_line() {
        let line = format_result_line(
            Algorithm::GreedyLargestFirst,
            &ExperimentResult::Completed { colors: 3, time: 0.5, coloring: vec![] }
        );
        assert_eq!(line, "Greedy LF       | Colors: 3 | Time: 0.500000 sec");
        let line = format_result_line(Algorithm::BruteForce, &ExperimentResult::Skipped);
        assert!(line.starts_with("Brute Force     | Colors: N/A"));
    }

    #[test]
    fn test_report_records_skipped() {
        let records = report_records("random", 9, &nine_cycle_report());
        assert_eq!(records.len(), 5);
        assert_eq!(records[3].algorithm, "Brute Force");
        assert_eq!(records[3].colors, None);
        assert_eq!(records[3].time, None);
        assert_eq!(records[4].colors, Some(3));
    }

    #[test]
    fn test_csv_append_writes_header_once() {
        let path = tmp_file("append.csv");
        let filename = path.to_str().unwrap();
        let report = nine_cycle_report();
        append_results_csv(filename, "random", 9, &report).unwrap();
        append_results_csv(filename, "random", 9, &report).unwrap();
        let content = fs::read_to_string(filename).unwrap();
        let lines:Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "GraphType,Size,Algorithm,Colors,Time");
        assert_eq!(lines.iter().filter(|l| l.starts_with("GraphType")).count(), 1);
        assert_eq!(lines[4], "random,9,Brute Force,,");
        let records = read_results_csv(filename).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[4].colors, Some(3));
    }

    #[test]
    fn test_csv_creates_directories() {
        let path = tmp_file("nested").join("results").join("out.csv");
        append_results_csv(path.to_str().unwrap(), "grid", 9, &nine_cycle_report()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_summarize() {
        let record = |g:&str, a:&str, c:Option<usize>, t:Option<f64>| ResultRecord {
            graph_type: g.to_string(), size: 4, algorithm: a.to_string(), colors: c, time: t
        };
        let records = vec![
            record("tree", "Greedy LF", Some(2), Some(1.)),
            record("grid", "Greedy LF", Some(2), Some(1.)),
            record("tree", "Greedy LF", Some(3), Some(3.)),
            record("tree", "Brute Force", None, None),
            record("grid", "Backtracking", Some(2), Some(0.5)),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.len(), 3);
        assert_eq!((summary[0].graph_type.as_str(), summary[0].algorithm.as_str()), ("grid", "Greedy LF"));
        assert_eq!(summary[1].algorithm, "Backtracking");
        assert_eq!(summary[2].graph_type, "tree");
        assert_eq!(summary[2].nb_runs, 2);
        assert!((summary[2].mean_colors - 2.5).abs() < 1e-9);
        assert!((summary[2].mean_time - 2.).abs() < 1e-9);
    }

    #[test]
    fn test_export_stats() {
        let path = tmp_file("perf.json");
        let stats = json!([experiment_stats("random", 0, &nine_cycle_report())]);
        export_stats(path.to_str().unwrap(), &stats).unwrap();
        let value:Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["size"], 9);
        assert_eq!(value[0]["results"][0]["algorithm"], "Greedy LF");
    }

    #[test]
    fn test_graph_source() {
        let source = GraphSource::Dimacs("insts/other-instances/petersen.col".to_string());
        assert_eq!(source.name(), "dimacs");
        let mut rng = rand::thread_rng();
        assert_eq!(source.load(&mut rng).unwrap().nb_edges(), 15);
    }
}
