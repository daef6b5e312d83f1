//! CLI parse: clap types for tfc. No behavior; definitions only.

use crate::output::OutputFlags;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tfc - Terraform Cloud from the command line
#[derive(Parser)]
#[command(name = "tfc", version)]
#[command(about = "Terraform Cloud from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Terraform Cloud organization
    #[arg(long, global = true, env = "TFC_ORG")]
    pub org: Option<String>,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Output-shaping flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// JSON output
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Tab-separated output for piping
    #[arg(long, global = true)]
    pub plaintext: bool,

    /// MiniJinja template for custom formatting
    #[arg(short = 't', long, global = true)]
    pub template: Option<String>,

    /// jq expression applied to the JSON output (implies --json)
    #[arg(long, visible_alias = "jq", global = true)]
    pub query: Option<String>,

    /// Comma-separated dotted field selection (implies --json)
    #[arg(long, global = true)]
    pub fields: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write output to file instead of stdout
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn to_flags(&self) -> OutputFlags {
        OutputFlags {
            json: self.json,
            plaintext: self.plaintext,
            template: self.template.clone(),
            query: self.query.clone(),
            fields: self.fields.clone(),
            no_color: self.no_color,
            debug: self.debug,
            output: self.output.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage organizations
    #[command(visible_alias = "org")]
    Organization {
        #[command(subcommand)]
        command: OrganizationCommands,
    },
    /// Manage workspaces
    #[command(visible_alias = "ws")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
    /// Manage runs
    Run {
        #[command(subcommand)]
        command: RunCommands,
    },
    /// Inspect plans
    Plan {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Inspect applies
    Apply {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Manage state versions
    #[command(visible_alias = "sv")]
    StateVersion {
        #[command(subcommand)]
        command: StateVersionCommands,
    },
    /// Manage workspace variables
    #[command(visible_alias = "var")]
    Variable {
        #[command(subcommand)]
        command: VariableCommands,
    },
}

/// Paging flags for list commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Fetch every page instead of only the first
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum OrganizationCommands {
    /// List organizations visible to the token
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show organization details (defaults to --org)
    Show { name: Option<String> },
}

#[derive(Subcommand, Debug, Clone)]
pub enum WorkspaceCommands {
    /// List workspaces in an organization
    List {
        /// Filter workspaces by name
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show workspace details
    Show { name: String },
    /// Lock a workspace
    Lock {
        id: String,
        /// Reason for locking
        #[arg(long)]
        reason: Option<String>,
    },
    /// Unlock a workspace
    Unlock { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum RunCommands {
    /// List runs for a workspace
    List {
        /// Workspace ID
        #[arg(long)]
        workspace: String,
        /// Filter by status
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show run details
    Show { id: String },
}

/// Plans and applies share the same surface.
#[derive(Subcommand, Debug, Clone)]
pub enum PhaseCommands {
    /// Show details
    Show { id: String },
    /// Stream the log output
    Logs { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum StateVersionCommands {
    /// List state versions for a workspace
    List {
        /// Workspace ID
        #[arg(long)]
        workspace: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show state version details
    Show { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum VariableCommands {
    /// List variables for a workspace
    List {
        /// Workspace ID
        #[arg(long)]
        workspace: String,
    },
    /// Show variable details
    Show { id: String },
    /// Create a workspace variable
    Create {
        /// Workspace ID
        #[arg(long)]
        workspace: String,
        /// Variable key
        #[arg(long)]
        key: String,
        /// Variable value
        #[arg(long, default_value = "")]
        value: String,
        /// Variable description
        #[arg(long, default_value = "")]
        description: String,
        /// Category: terraform or env
        #[arg(long, default_value = "terraform", value_parser = ["terraform", "env"])]
        category: String,
        /// Parse value as HCL
        #[arg(long)]
        hcl: bool,
        /// Mark as sensitive
        #[arg(long)]
        sensitive: bool,
    },
    /// Delete a variable
    Delete {
        id: String,
        /// Workspace ID (uses the workspace-scoped endpoint)
        #[arg(long)]
        workspace: Option<String>,
    },
}
