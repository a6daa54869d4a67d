//! Terminal command registry.
//!
//! A closed, static table: every command the terminal understands is listed
//! in `COMMAND_SPECS`, in the order `help` prints them.

use folio_content::SiteContent;
use folio_types::{CommandOutput, Row};

use crate::DeferredEffect;

/// The one multi-word command. Matched by prefix before token dispatch.
const HIRE_ME: &str = "hire me";

/// What a command hands back to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub output: CommandOutput,
    /// Side effect to schedule once the reply is in the scrollback.
    pub effect: Option<DeferredEffect>,
}

impl From<CommandOutput> for CommandReply {
    fn from(output: CommandOutput) -> Self {
        Self {
            output,
            effect: None,
        }
    }
}

/// Static content a command may read.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub content: &'a SiteContent,
}

type Handler = fn(&CommandContext<'_>, &[&str]) -> CommandReply;

#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Dictionary key of the one-line description shown by `help`.
    pub summary_key: &'static str,
    run: Handler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("summary_key", &self.summary_key)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    #[must_use]
    pub fn run(&self, ctx: &CommandContext<'_>, args: &[&str]) -> CommandReply {
        (self.run)(ctx, args)
    }
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        summary_key: "terminal.commands.help",
        run: help,
    },
    CommandSpec {
        name: "about",
        summary_key: "terminal.commands.about",
        run: about,
    },
    CommandSpec {
        name: "experience",
        summary_key: "terminal.commands.experience",
        run: experience,
    },
    CommandSpec {
        name: "projects",
        summary_key: "terminal.commands.projects",
        run: projects,
    },
    CommandSpec {
        name: "skills",
        summary_key: "terminal.commands.skills",
        run: skills,
    },
    CommandSpec {
        name: "certifications",
        summary_key: "terminal.commands.certifications",
        run: certifications,
    },
    CommandSpec {
        name: "contact",
        summary_key: "terminal.commands.contact",
        run: contact,
    },
    CommandSpec {
        name: "echo",
        summary_key: "terminal.commands.echo",
        run: echo,
    },
    CommandSpec {
        name: "date",
        summary_key: "terminal.commands.date",
        run: date,
    },
    CommandSpec {
        name: "clear",
        summary_key: "terminal.commands.clear",
        run: clear,
    },
    CommandSpec {
        name: "exit",
        summary_key: "terminal.commands.exit",
        run: exit,
    },
    CommandSpec {
        name: HIRE_ME,
        summary_key: "terminal.commands.hire_me",
        run: hire_me,
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

/// Registry entry for `name`, ignoring ASCII case.
#[must_use]
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMAND_SPECS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Evaluate one trimmed, non-empty input line.
pub(crate) fn dispatch(line: &str, ctx: &CommandContext<'_>) -> CommandReply {
    let normalized = line.to_lowercase();

    if let Some(rest) = normalized.strip_prefix(HIRE_ME) {
        let args: Vec<&str> = rest.split_whitespace().collect();
        return hire_me(ctx, &args);
    }

    let mut tokens = normalized.split_whitespace();
    let main = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match find_command(main) {
        Some(spec) => {
            tracing::debug!(command = spec.name, ?args, "Dispatching terminal command");
            spec.run(ctx, &args)
        }
        None => {
            tracing::debug!(command = main, "Unknown terminal command");
            not_found(ctx, main).into()
        }
    }
}

fn not_found(ctx: &CommandContext<'_>, command: &str) -> CommandOutput {
    CommandOutput::NotFound {
        command: command.to_string(),
        message: ctx
            .content
            .localizer()
            .format("terminal.not_found", &[("command", command)]),
    }
}

fn help(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let localizer = ctx.content.localizer();
    let rows = COMMAND_SPECS
        .iter()
        .map(|spec| Row::new(spec.name, localizer.text(spec.summary_key)))
        .collect();
    CommandOutput::Rows { rows }.into()
}

fn about(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let profile = ctx.content.profile();
    CommandOutput::lines(
        Some(profile.name.clone()),
        vec![
            profile.role.clone(),
            profile.location.clone(),
            profile.summary.clone(),
        ],
    )
    .into()
}

fn experience(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let mut lines = Vec::new();
    for entry in &ctx.content.profile().experience {
        lines.push(format!(
            "{} | {} @ {}",
            entry.period, entry.role, entry.company
        ));
        lines.extend(entry.highlights.iter().map(|h| format!("  - {h}")));
    }
    let heading = ctx.content.localizer().text("terminal.experience_heading");
    CommandOutput::lines(Some(heading.into_owned()), lines).into()
}

fn projects(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let rows = ctx
        .content
        .catalog()
        .projects()
        .iter()
        .map(|project| {
            Row::new(
                project.id.as_str(),
                format!("{} - {}", project.title, project.subtitle),
            )
        })
        .collect();
    CommandOutput::Rows { rows }.into()
}

/// `skills [category]`; an unknown or missing category lists every group.
fn skills(ctx: &CommandContext<'_>, args: &[&str]) -> CommandReply {
    let profile = ctx.content.profile();
    let requested = args.join(" ");

    if let Some(group) = profile.skill_group(&requested) {
        return CommandOutput::lines(Some(group.title.clone()), group.items.clone()).into();
    }

    let localizer = ctx.content.localizer();
    let mut lines: Vec<String> = profile
        .skills
        .iter()
        .map(|group| format!("{}: {}", group.title, group.items.join(", ")))
        .collect();
    let categories: Vec<&str> = profile.skills.iter().map(|group| group.key).collect();
    lines.push(localizer.format(
        "terminal.skills_hint",
        &[("categories", categories.join(", ").as_str())],
    ));
    CommandOutput::lines(
        Some(localizer.text("terminal.skills_heading").into_owned()),
        lines,
    )
    .into()
}

fn certifications(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let heading = ctx
        .content
        .localizer()
        .text("terminal.certifications_heading");
    CommandOutput::lines(
        Some(heading.into_owned()),
        ctx.content.profile().certifications.clone(),
    )
    .into()
}

fn contact(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    CommandOutput::Links {
        links: ctx.content.profile().contact.clone(),
    }
    .into()
}

fn echo(_ctx: &CommandContext<'_>, args: &[&str]) -> CommandReply {
    CommandOutput::text(args.join(" ")).into()
}

fn date(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    let now = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S %:z")
        .to_string();
    CommandOutput::text(ctx.content.localizer().format("terminal.date", &[("date", now.as_str())])).into()
}

fn clear(_ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    CommandReply {
        output: CommandOutput::text(""),
        effect: Some(DeferredEffect::ClearScrollback),
    }
}

fn exit(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    CommandReply {
        output: CommandOutput::text(ctx.content.localizer().text("terminal.farewell")),
        effect: Some(DeferredEffect::CloseTerminal),
    }
}

fn hire_me(ctx: &CommandContext<'_>, _args: &[&str]) -> CommandReply {
    CommandOutput::lines(None, ctx.content.localizer().list("terminal.hire_me")).into()
}
