//! Template command for exporting a starter CSV project file
//!
//! Implements the `tch template` command: write the two-row template record
//! set so users have a working file to edit.

use clap::Args;
use std::path::PathBuf;

use crate::error::ChartResult;
use crate::model::{template_records, write_records};

/// Export a template CSV project file
#[derive(Debug, Args)]
pub struct TemplateCommand {
    /// Output file path
    #[arg(short, long, default_value = "project_template.csv")]
    pub output: PathBuf,
}

impl TemplateCommand {
    /// Execute the template command.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::WriteOutput` if the file cannot be written.
    pub async fn execute(&self) -> ChartResult<String> {
        let records = template_records();
        write_records(&self.output, &records)?;
        Ok(format!(
            "Template CSV has been exported to {}",
            self.output.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::read_records;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "tch-template-{}-{}-{:?}-{}.csv",
            name,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[tokio::test]
    async fn test_execute_writes_template_and_reports_path() {
        let path = temp_path("write");
        let cmd = TemplateCommand {
            output: path.clone(),
        };

        let message = cmd.execute().await.unwrap();
        assert!(message.contains("Template CSV has been exported to"));
        assert!(message.contains(path.to_str().unwrap()));

        let reparsed = read_records(&path).unwrap();
        assert_eq!(reparsed, template_records());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_execute_unwritable_path_errors() {
        let cmd = TemplateCommand {
            output: PathBuf::from("/no/such/dir/template.csv"),
        };
        let err = cmd.execute().await.unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/template.csv"));
    }
}
