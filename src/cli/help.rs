//! Dotted command names for logging (e.g. "workspace.list", "plan.logs").

use crate::cli::parse::{
    Commands, OrganizationCommands, PhaseCommands, RunCommands, StateVersionCommands,
    VariableCommands, WorkspaceCommands,
};

pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Organization { command } => {
            format!("organization.{}", organization_command_name(command))
        }
        Commands::Workspace { command } => format!("workspace.{}", workspace_command_name(command)),
        Commands::Run { command } => format!("run.{}", run_command_name(command)),
        Commands::Plan { command } => format!("plan.{}", phase_command_name(command)),
        Commands::Apply { command } => format!("apply.{}", phase_command_name(command)),
        Commands::StateVersion { command } => {
            format!("state_version.{}", state_version_command_name(command))
        }
        Commands::Variable { command } => format!("variable.{}", variable_command_name(command)),
    }
}

pub fn organization_command_name(command: &OrganizationCommands) -> &'static str {
    match command {
        OrganizationCommands::List { .. } => "list",
        OrganizationCommands::Show { .. } => "show",
    }
}

pub fn workspace_command_name(command: &WorkspaceCommands) -> &'static str {
    match command {
        WorkspaceCommands::List { .. } => "list",
        WorkspaceCommands::Show { .. } => "show",
        WorkspaceCommands::Lock { .. } => "lock",
        WorkspaceCommands::Unlock { .. } => "unlock",
    }
}

pub fn run_command_name(command: &RunCommands) -> &'static str {
    match command {
        RunCommands::List { .. } => "list",
        RunCommands::Show { .. } => "show",
    }
}

pub fn phase_command_name(command: &PhaseCommands) -> &'static str {
    match command {
        PhaseCommands::Show { .. } => "show",
        PhaseCommands::Logs { .. } => "logs",
    }
}

pub fn state_version_command_name(command: &StateVersionCommands) -> &'static str {
    match command {
        StateVersionCommands::List { .. } => "list",
        StateVersionCommands::Show { .. } => "show",
    }
}

pub fn variable_command_name(command: &VariableCommands) -> &'static str {
    match command {
        VariableCommands::List { .. } => "list",
        VariableCommands::Show { .. } => "show",
        VariableCommands::Create { .. } => "create",
        VariableCommands::Delete { .. } => "delete",
    }
}
