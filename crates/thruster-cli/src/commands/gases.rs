//! Gases command handler.

use anyhow::Result;

use thruster_cli::output::render_gases;

use super::SweepContext;

/// Print the resolved gas table.
pub fn handle_list_gases(context: &SweepContext) -> Result<()> {
    print!("{}", render_gases(&context.gases));
    Ok(())
}
