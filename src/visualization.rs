use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::color::{ColoringInstance, Coloring};
use crate::error::Result;

/// tableau palette (color c is drawn with PALETTE[c % 10])
pub const PALETTE:[&str ; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// color of vertices without a color
pub const UNCOLORED:&str = "gray";

/// file name associated to a title ("Greedy LF Coloring" -> "greedy_lf_coloring")
pub fn title_to_filename(title:&str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/** Graphviz (DOT) representation of a colored graph.
Vertices outside of the coloring are drawn in gray.
*/
pub fn to_dot(inst:&dyn ColoringInstance, coloring:&[usize], title:&str) -> String {
    let mut res = String::default();
    // writing into a String never fails
    let _ = writeln!(res, "graph \"{}\" {{", title.replace('"', "'"));
    let _ = writeln!(res, "  label=\"{}\";", title.replace('"', "'"));
    let _ = writeln!(res, "  node [style=filled, shape=circle];");
    for v in inst.vertices() {
        let fill = coloring.get(v).map_or(UNCOLORED, |c| PALETTE[c % PALETTE.len()]);
        let _ = writeln!(res, "  {} [fillcolor=\"{}\"];", v, fill);
    }
    for (u,v) in inst.edges() {
        let _ = writeln!(res, "  {} -- {} [color=gray];", u, v);
    }
    res.push_str("}\n");
    res
}

/** writes the DOT rendering of a coloring in out_dir/<title>.dot.
Does nothing (and returns Ok(None)) if the coloring is absent or empty.
*/
pub fn draw_graph(
    inst:&dyn ColoringInstance,
    coloring:Option<&Coloring>,
    title:&str,
    out_dir:&str,
) -> Result<Option<PathBuf>> {
    let coloring = match coloring {
        Some(c) if !c.is_empty() => c,
        _ => return Ok(None),
    };
    fs::create_dir_all(out_dir)?;
    let path = Path::new(out_dir).join(format!("{}.dot", title_to_filename(title)));
    fs::write(&path, to_dot(inst, coloring, title))?;
    info!("graph saved to: {}", path.display());
    Ok(Some(path))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    fn path3() -> CompactInstance {
        CompactInstance::from_edges(3, &[(0,1), (1,2)]).unwrap()
    }

    #[test]
    fn test_title_to_filename() {
        assert_eq!(title_to_filename("Greedy LF Coloring"), "greedy_lf_coloring");
    }

    #[test]
    fn test_to_dot() {
        let dot = to_dot(&path3(), &[0,11,0], "Path");
        assert!(dot.starts_with("graph \"Path\" {"));
        assert!(dot.contains("0 [fillcolor=\"#1f77b4\"];"));
        assert!(dot.contains("1 [fillcolor=\"#ff7f0e\"];")); // 11 % 10 == 1
        assert!(dot.contains("1 -- 2"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_partial_coloring_is_gray() {
        let dot = to_dot(&path3(), &[0], "Partial");
        assert!(dot.contains("2 [fillcolor=\"gray\"];"));
    }

    #[test]
    fn test_draw_graph_noop() {
        let inst = path3();
        let dir = std::env::temp_dir().join(format!("coloring_bench_noop_{}", std::process::id()));
        let dir = dir.to_str().unwrap();
        assert_eq!(draw_graph(&inst, None, "Brute Force Coloring", dir).unwrap(), None);
        assert_eq!(draw_graph(&inst, Some(&vec![]), "Brute Force Coloring", dir).unwrap(), None);
        assert!(!Path::new(dir).exists());
    }

    #[test]
    fn test_draw_graph_writes_file() {
        let inst = path3();
        let dir = std::env::temp_dir().join(format!("coloring_bench_plots_{}", std::process::id()));
        let path = draw_graph(&inst, Some(&vec![0,1,0]), "Greedy SL Coloring", dir.to_str().unwrap())
            .unwrap()
            .unwrap();
        assert!(path.ends_with("greedy_sl_coloring.dot"));
        assert!(fs::read_to_string(&path).unwrap().contains("0 -- 1"));
    }
}
