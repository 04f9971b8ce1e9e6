use fechamento_engine::source::fetch_latest;

use super::SourceArgs;
use crate::output;

pub fn run(sources: &SourceArgs) -> anyhow::Result<()> {
    if sources.is_empty() {
        anyhow::bail!("nothing to fetch: pass --primary/--fallback or drop --offline");
    }
    let contest = fetch_latest(&sources.sources())?;
    output::print_contest(&contest);
    Ok(())
}
