//! Interactive menu shell for taskchart
//!
//! The shell is a declarative tree of categories, submenus, and actions.
//! Each leaf carries an executor behind a trait object; the Gantt leaves do
//! real work, the remaining operational leaves are stubs. The loop reads
//! numbered selections from any `BufRead` and writes to any `Write`, so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::chart::render_chart;
use crate::error::ChartResult;
use crate::model::{read_records, template_records, validate_all, write_records};

/// Default CSV path offered by the view-chart prompt
const DEFAULT_PROJECT_FILE: &str = "project.csv";

/// Default output path for the template export
const DEFAULT_TEMPLATE_FILE: &str = "project_template.csv";

/// Console streams for one shell session.
pub struct ShellIo<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

/// A leaf action's behavior.
pub trait ActionExecutor {
    /// Run the action, prompting through `io` if needed, and return the text
    /// to show the user.
    fn run(&self, io: &mut ShellIo<'_>) -> ChartResult<String>;
}

/// One selectable leaf.
pub struct Action {
    pub name: &'static str,
    executor: Box<dyn ActionExecutor>,
}

/// A named group of actions.
pub struct Submenu {
    pub name: &'static str,
    pub actions: Vec<Action>,
}

/// A top-level category.
pub struct Category {
    pub name: &'static str,
    pub submenus: Vec<Submenu>,
}

/// The full menu tree.
pub struct MenuTree {
    pub categories: Vec<Category>,
}

/// Render a Gantt chart from a CSV file chosen at a prompt.
struct ViewChartAction {
    chart_width: usize,
}

impl ActionExecutor for ViewChartAction {
    fn run(&self, io: &mut ShellIo<'_>) -> ChartResult<String> {
        let path = prompt_line(
            io,
            &format!(
                "Enter the path to your project CSV file [{}]: ",
                DEFAULT_PROJECT_FILE
            ),
        )?;
        let path = if path.is_empty() {
            PathBuf::from(DEFAULT_PROJECT_FILE)
        } else {
            PathBuf::from(path)
        };

        let records = read_records(&path)?;
        let tasks = validate_all(&records)?;
        let mut lines = vec!["Generating Gantt Chart...".to_string(), String::new()];
        lines.extend(render_chart(&tasks, self.chart_width));
        Ok(lines.join("\n"))
    }
}

/// Write the template record set to a CSV file.
struct ExportTemplateAction {
    output: PathBuf,
}

impl ActionExecutor for ExportTemplateAction {
    fn run(&self, _io: &mut ShellIo<'_>) -> ChartResult<String> {
        write_records(&self.output, &template_records())?;
        Ok(format!(
            "Template CSV has been exported to {}",
            self.output.display()
        ))
    }
}

/// Placeholder for operational leaves with no implementation yet.
struct UnimplementedAction;

impl ActionExecutor for UnimplementedAction {
    fn run(&self, _io: &mut ShellIo<'_>) -> ChartResult<String> {
        Ok("This action is not yet implemented.".to_string())
    }
}

fn stub(name: &'static str) -> Action {
    Action {
        name,
        executor: Box::new(UnimplementedAction),
    }
}

/// Build the default tree: project management with the working Gantt tools,
/// plus the stubbed development and system categories.
pub fn default_tree(chart_width: usize) -> MenuTree {
    default_tree_with_template(chart_width, Path::new(DEFAULT_TEMPLATE_FILE))
}

/// Like [`default_tree`] but with a custom template output path. Tests use
/// this to keep exports inside a temp directory.
pub fn default_tree_with_template(chart_width: usize, template_output: &Path) -> MenuTree {
    MenuTree {
        categories: vec![
            Category {
                name: "Project Management",
                submenus: vec![Submenu {
                    name: "Gantt Chart Tools",
                    actions: vec![
                        Action {
                            name: "View Gantt Chart from CSV",
                            executor: Box::new(ViewChartAction { chart_width }),
                        },
                        Action {
                            name: "Export Template CSV",
                            executor: Box::new(ExportTemplateAction {
                                output: template_output.to_path_buf(),
                            }),
                        },
                    ],
                }],
            },
            Category {
                name: "Development Tools",
                submenus: vec![
                    Submenu {
                        name: "Git Operations",
                        actions: vec![
                            stub("Status"),
                            stub("Pull"),
                            stub("Push"),
                            stub("Create Branch"),
                        ],
                    },
                    Submenu {
                        name: "Docker Commands",
                        actions: vec![
                            stub("List Containers"),
                            stub("Start Container"),
                            stub("Stop Container"),
                            stub("Remove Container"),
                        ],
                    },
                    Submenu {
                        name: "Database Operations",
                        actions: vec![
                            stub("Backup"),
                            stub("Restore"),
                            stub("Migrate"),
                            stub("Reset"),
                        ],
                    },
                ],
            },
            Category {
                name: "System Operations",
                submenus: vec![
                    Submenu {
                        name: "Network Tools",
                        actions: vec![
                            stub("Check Connection"),
                            stub("List Ports"),
                            stub("DNS Lookup"),
                            stub("IP Config"),
                        ],
                    },
                    Submenu {
                        name: "Process Management",
                        actions: vec![
                            stub("List Processes"),
                            stub("Kill Process"),
                            stub("Monitor Resources"),
                            stub("Start Service"),
                        ],
                    },
                ],
            },
        ],
    }
}

/// Run the shell on stdin/stdout until the user quits.
pub fn run_shell(chart_width: usize) -> ChartResult<()> {
    let tree = default_tree(chart_width);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let mut io = ShellIo {
        input: &mut input,
        output: &mut output,
    };
    run_shell_io(&tree, &mut io)
}

/// Drive the menu loop over the given streams.
///
/// Selections are 1-based numbers; anything else re-prompts. End of input
/// exits the loop cleanly at any prompt.
pub fn run_shell_io(tree: &MenuTree, io: &mut ShellIo<'_>) -> ChartResult<()> {
    loop {
        let category_names: Vec<&str> = tree.categories.iter().map(|c| c.name).collect();
        let Some(category_idx) = select(io, "Select a category:", &category_names)? else {
            break;
        };
        let category = &tree.categories[category_idx];

        let submenu_names: Vec<&str> = category.submenus.iter().map(|s| s.name).collect();
        let Some(submenu_idx) = select(io, "Select an operation:", &submenu_names)? else {
            break;
        };
        let submenu = &category.submenus[submenu_idx];

        let action_names: Vec<&str> = submenu.actions.iter().map(|a| a.name).collect();
        let Some(action_idx) = select(io, "Select an action:", &action_names)? else {
            break;
        };
        let action = &submenu.actions[action_idx];

        writeln!(
            io.output,
            "Executing: {} > {} > {}",
            category.name, submenu.name, action.name
        )?;

        // A failing action reports and returns to the menu; it does not end
        // the session.
        match action.executor.run(io) {
            Ok(message) => writeln!(io.output, "{}", message)?,
            Err(e) => writeln!(io.output, "error: {}", e.full_message())?,
        }

        let answer = prompt_line(io, "Would you like to perform another operation? [Y/n] ")?;
        if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") {
            break;
        }
    }

    writeln!(io.output, "Goodbye!")?;
    Ok(())
}

/// Print a numbered list and read a 1-based selection.
///
/// Returns `None` when the input stream ends.
fn select(io: &mut ShellIo<'_>, title: &str, choices: &[&str]) -> ChartResult<Option<usize>> {
    loop {
        writeln!(io.output, "{}", title)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(io.output, "  {}) {}", i + 1, choice)?;
        }
        write!(io.output, "> ")?;
        io.output.flush()?;

        let mut line = String::new();
        if io.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= choices.len() => return Ok(Some(n - 1)),
            _ => writeln!(
                io.output,
                "Please enter a number between 1 and {}.",
                choices.len()
            )?,
        }
    }
}

/// Show a prompt and read one trimmed line. End of input reads as empty.
fn prompt_line(io: &mut ShellIo<'_>, prompt: &str) -> ChartResult<String> {
    write!(io.output, "{}", prompt)?;
    io.output.flush()?;
    let mut line = String::new();
    io.input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
