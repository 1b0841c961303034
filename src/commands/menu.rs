//! Menu command for the interactive shell

use clap::Args;

use crate::chart::DEFAULT_CHART_WIDTH;
use crate::error::ChartResult;
use crate::menu::run_shell;

/// Open the interactive menu shell
#[derive(Debug, Args)]
pub struct MenuCommand {
    /// Number of chart columns used by the view-chart action
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: usize,
}

impl MenuCommand {
    /// Execute the menu command. The shell owns stdin/stdout until the user
    /// quits; there is nothing left to print afterwards.
    pub async fn execute(&self) -> ChartResult<String> {
        run_shell(self.width)?;
        Ok(String::new())
    }
}
