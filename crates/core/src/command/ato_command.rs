/// Name of the build tool every composed line invokes
pub const ATO_PROGRAM: &str = "ato";

/// One `ato` invocation, rendered as a single line of shell text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtoCommand {
    pub args: Vec<String>,
}

impl AtoCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn create() -> Self {
        Self::new(vec!["create".to_string()])
    }

    /// `ato build`, narrowed to one build when a name is known
    pub fn build(build_name: Option<&str>) -> Self {
        let mut args = vec!["build".to_string()];
        if let Some(name) = build_name {
            args.push("--build".to_string());
            args.push(name.to_string());
        }
        Self::new(args)
    }

    pub fn install_jlcpcb(component_id: &str) -> Self {
        Self::new(vec![
            "install".to_string(),
            "--jlcpcb".to_string(),
            component_id.to_string(),
        ])
    }

    pub fn install_package(package: &str) -> Self {
        Self::new(vec!["install".to_string(), package.to_string()])
    }

    /// Arguments are typed verbatim; the user's shell does any splitting.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::from(ATO_PROGRAM);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_target() {
        assert_eq!(AtoCommand::build(Some("a")).to_shell_command(), "ato build --build a");
    }

    #[test]
    fn test_build_without_target() {
        assert_eq!(AtoCommand::build(None).to_shell_command(), "ato build");
    }

    #[test]
    fn test_create() {
        assert_eq!(AtoCommand::create().to_shell_command(), "ato create");
    }

    #[test]
    fn test_install_commands() {
        assert_eq!(
            AtoCommand::install_jlcpcb("C25744").to_shell_command(),
            "ato install --jlcpcb C25744"
        );
        assert_eq!(
            AtoCommand::install_package("generics").to_shell_command(),
            "ato install generics"
        );
    }

    #[test]
    fn test_arguments_are_not_quoted() {
        assert_eq!(
            AtoCommand::install_package("generics --upgrade").to_shell_command(),
            "ato install generics --upgrade"
        );
    }
}
