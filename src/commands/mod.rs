//! CLI commands for taskchart
//!
//! This module contains all subcommand implementations for the tch CLI.

pub mod chart;
pub mod float;
pub mod menu;
pub mod template;

pub use chart::ChartCommand;
pub use float::FloatCommand;
pub use menu::MenuCommand;
pub use template::TemplateCommand;

use crate::error::ChartResult;
use clap::Subcommand;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a Gantt chart from a CSV project file
    Chart(ChartCommand),
    /// Export a template CSV project file
    Template(TemplateCommand),
    /// Fetch data from the Float scheduling API
    Float(FloatCommand),
    /// Open the interactive menu shell
    Menu(MenuCommand),
}

impl Command {
    /// Execute the command and return the text to print.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if the command execution fails.
    pub async fn execute(&self) -> ChartResult<String> {
        match self {
            Command::Chart(cmd) => cmd.execute().await,
            Command::Template(cmd) => cmd.execute().await,
            Command::Float(cmd) => cmd.execute().await,
            Command::Menu(cmd) => cmd.execute().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_command_chart_parses() {
        let cli = TestCli::try_parse_from(["test", "chart", "project.csv"]);
        assert!(cli.is_ok());
        match cli.unwrap().command {
            Command::Chart(cmd) => {
                assert_eq!(cmd.file.to_str().unwrap(), "project.csv");
                assert_eq!(cmd.width, 50);
            }
            _ => panic!("Expected Chart command"),
        }
    }

    #[test]
    fn test_command_chart_with_width() {
        let cli = TestCli::try_parse_from(["test", "chart", "plan.csv", "--width", "80"]);
        match cli.unwrap().command {
            Command::Chart(cmd) => assert_eq!(cmd.width, 80),
            _ => panic!("Expected Chart command"),
        }
    }

    #[test]
    fn test_command_chart_requires_file() {
        let result = TestCli::try_parse_from(["test", "chart"]);
        match result {
            Err(e) => {
                let err = e.to_string();
                assert!(
                    err.contains("required") || err.contains("<FILE>"),
                    "Error should mention the required file argument, got: {}",
                    err
                );
            }
            Ok(_) => panic!("Expected error for missing file"),
        }
    }

    #[test]
    fn test_command_template_parses_with_default_output() {
        let cli = TestCli::try_parse_from(["test", "template"]);
        match cli.unwrap().command {
            Command::Template(cmd) => {
                assert_eq!(cmd.output.to_str().unwrap(), "project_template.csv");
            }
            _ => panic!("Expected Template command"),
        }
    }

    #[test]
    fn test_command_template_with_output() {
        let cli = TestCli::try_parse_from(["test", "template", "--output", "/tmp/t.csv"]);
        match cli.unwrap().command {
            Command::Template(cmd) => {
                assert_eq!(cmd.output.to_str().unwrap(), "/tmp/t.csv");
            }
            _ => panic!("Expected Template command"),
        }
    }

    #[test]
    fn test_command_float_parses_resources() {
        use super::float::FloatResource;

        for (arg, expected) in [
            ("people", FloatResource::People),
            ("project-tasks", FloatResource::ProjectTasks),
            ("allocations", FloatResource::Allocations),
        ] {
            let cli = TestCli::try_parse_from(["test", "float", arg]).unwrap();
            match cli.command {
                Command::Float(cmd) => assert_eq!(cmd.resource, expected),
                _ => panic!("Expected Float command"),
            }
        }
    }

    #[test]
    fn test_command_float_rejects_unknown_resource() {
        let result = TestCli::try_parse_from(["test", "float", "invoices"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_menu_parses() {
        let cli = TestCli::try_parse_from(["test", "menu"]);
        match cli.unwrap().command {
            Command::Menu(cmd) => assert_eq!(cmd.width, 50),
            _ => panic!("Expected Menu command"),
        }
    }

    #[test]
    fn test_command_debug() {
        let cli = TestCli::try_parse_from(["test", "chart", "plan.csv"]).unwrap();
        let debug_str = format!("{:?}", cli.command);
        assert!(
            debug_str.contains("Chart") && debug_str.contains("plan.csv"),
            "Command debug should contain Chart variant and file value"
        );
    }
}
