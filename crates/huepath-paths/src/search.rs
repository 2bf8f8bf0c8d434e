use huepath_core::{Color, GridError, Pos, TileGrid};

use crate::config::SearchConfig;
use crate::cost::{AgentProfile, CostModel};
use crate::result::SearchResult;

/// Walk from `start` to the grid's goal marker for the given agent and goal
/// colour, with no expansion bound.
///
/// See [`search_with`].
pub fn search(
    grid: &TileGrid,
    profile: AgentProfile,
    goal_color: Color,
    start: Pos,
) -> Result<SearchResult, GridError> {
    search_with(grid, profile, goal_color, start, &SearchConfig::default())
}

/// Walk from `start` to the grid's goal marker.
///
/// Only a `start` outside the grid is an error. A grid without a goal, a
/// walk that strands itself and a walk cut short by `config` all come back
/// as an `Ok` result with an empty path and the unreachable cost; inspect
/// [`SearchResult::outcome`] to tell them apart.
pub fn search_with(
    grid: &TileGrid,
    profile: AgentProfile,
    goal_color: Color,
    start: Pos,
    config: &SearchConfig,
) -> Result<SearchResult, GridError> {
    if !grid.contains(start) {
        return Err(GridError::InvalidPosition {
            pos: start,
            bounds: grid.bounds(),
        });
    }
    let model = match CostModel::new(grid, profile, goal_color) {
        Ok(model) => model,
        Err(GridError::NoGoal) => {
            log::warn!("no goal marker in the {} grid, nothing to search", grid.bounds());
            return Ok(SearchResult::no_goal());
        }
        Err(e) => return Err(e),
    };

    log::debug!(
        "searching {} -> {} as {profile} agent, goal colour {goal_color}",
        start,
        model.goal()
    );
    let mut engine = model.walk_from(start)?;
    let outcome = engine.run(config);
    let result = engine.into_result();
    if !outcome.is_success() {
        log::info!("{outcome} after {} expansions", result.iterations);
    }
    log::debug!(
        "search finished: {outcome}, cost {}, {} expansions",
        result.cost,
        result.iterations
    );
    Ok(result)
}
