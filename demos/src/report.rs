//! Console report of a search result.

use std::io::{self, Write};

use huepath_core::Pos;
use huepath_paths::SearchResult;

fn join(positions: impl IntoIterator<Item = Pos>) -> String {
    let parts: Vec<String> = positions.into_iter().map(|p| p.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Write the human-readable report for `result`.
pub fn write_report<W: Write>(w: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(w, "Outcome:-> {}", result.outcome)?;
    writeln!(w, "Path:-> {}", join(result.path.iter().copied()))?;
    writeln!(w, "Length of Path:-> {}", result.len())?;
    match result.total_cost() {
        Some(cost) => writeln!(w, "Total Cost:-> {cost}")?,
        None => writeln!(w, "Total Cost:-> inf")?,
    }
    let candidates: Vec<String> = result
        .candidates
        .iter()
        .map(|(p, f)| format!("{p}: {f}"))
        .collect();
    writeln!(w, "Candidates:-> {{{}}}", candidates.join(", "))?;
    writeln!(w, "Visited:-> {}", join(result.visited.iter().copied()))?;
    writeln!(w, "Expansions:-> {}", result.iterations)?;
    Ok(())
}
