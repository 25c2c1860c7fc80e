use ato_runner_core::registry::{self, CommandId};

/// Print the loaded targets, marking the selected one
pub fn print_targets(targets: &[String], selected: Option<&str>) {
    if targets.is_empty() {
        println!("❌ No build targets found in ato.yaml");
        return;
    }

    println!("✅ Found {} build target(s):\n", targets.len());
    for line in format_targets(targets, selected) {
        println!("{line}");
    }
}

pub fn format_targets(targets: &[String], selected: Option<&str>) -> Vec<String> {
    targets
        .iter()
        .enumerate()
        .map(|(i, target)| {
            let marker = if Some(target.as_str()) == selected { "*" } else { " " };
            format!("{marker} {}. {}", i + 1, target)
        })
        .collect()
}

/// Print the status-bar buttons with the command that runs each one
pub fn print_status_bar(selected: Option<&str>) {
    println!("🔧 Commands:");
    for line in format_status_bar(selected) {
        println!("   {line}");
    }
    // no button; only reachable as a command
    println!("   {:<26} {:<20} ato: set interpreter", CommandId::SetInterpreter.id(), "");
}

pub fn format_status_bar(selected: Option<&str>) -> Vec<String> {
    registry::status_bar()
        .into_iter()
        .map(|item| {
            let text = match item.command {
                CommandId::ChooseBuildTarget => selected.unwrap_or("(no build target)"),
                _ => item.icon,
            };
            format!("{:<26} {:<20} {}", item.command.id(), text, item.tooltip)
        })
        .collect()
}
