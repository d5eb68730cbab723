use crate::commands::{config, shell};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

/// Long-help material for one subcommand.
#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    /// Usage/description pairs listed before the examples.
    pub reference: &'static [(&'static str, &'static str)],
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "shell",
            reference: shell::HELP,
            groups: shell::EXAMPLES,
        },
        CommandExample {
            name: "config",
            reference: &[],
            groups: config::EXAMPLES,
        },
    ]
}
