use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Args;
use picfeed::{App, AppError, ProfileSummary, SearchView};
use thiserror::Error;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::render::UserList;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Interactive",
        commands: &["picfeed shell                       # Start an interactive session"],
    },
    ExampleGroup {
        title: "Scripted",
        commands: &[
            "picfeed shell --script demo.txt     # Run commands from a file",
            "picfeed --output json shell < cmds  # Pipe commands, print JSON",
        ],
    },
];

const PROMPT: &str = "Insert your command.";

pub const HELP: &[(&str, &str)] = &[
    ("signup <email> <password> <username> [name...]", "Create an account and log in"),
    ("login <email> <password>", "Log in"),
    ("logout", "Log out"),
    ("whoami", "Show the logged-in profile"),
    ("follow <email>", "Follow an account"),
    ("unfollow <email>", "Unfollow an account"),
    ("toggle <username>", "Follow or unfollow by username"),
    ("post <url> [description...]", "Publish an image"),
    ("search [query...]", "Search; `*` for everything, `from:<user>` for one author"),
    ("home", "Your posts and posts of people you follow"),
    ("all", "Every post"),
    ("me", "Your own posts and profile"),
    ("user <username>", "Posts and profile of a user"),
    ("users", "List usernames"),
    ("help", "Show this list"),
    ("exit", "Leave the shell"),
];

#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Read commands from a file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SignUp {
        email: String,
        password: String,
        username: String,
        name: String,
    },
    LogIn {
        email: String,
        password: String,
    },
    LogOut,
    WhoAmI,
    Follow(String),
    Unfollow(String),
    Toggle(String),
    Post {
        url: String,
        description: String,
    },
    Search(String),
    Users,
    Help,
    Exit,
    Blank,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("We don't have that option")]
    Unknown(String),

    /// An auth failure, as posted to the app's notice board.
    #[error("{0}")]
    Notice(String),

    #[error(transparent)]
    App(#[from] AppError),
}

impl ShellCommand {
    /// Parses one line. Everything after `search ` is kept verbatim, so
    /// `search` alone is the empty query and `search  ` is not.
    pub fn parse(line: &str, current_username: Option<&str>) -> Result<Self, ShellError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim(), ""),
        };
        let mut args = rest.split_whitespace();

        let command = match word {
            "" => ShellCommand::Blank,
            "signup" => {
                let usage = ShellError::Usage("signup <email> <password> <username> [name...]");
                let email = args.next().ok_or(usage.clone())?;
                let password = args.next().ok_or(usage.clone())?;
                let username = args.next().ok_or(usage)?;
                ShellCommand::SignUp {
                    email: email.to_string(),
                    password: password.to_string(),
                    username: username.to_string(),
                    name: args.collect::<Vec<_>>().join(" "),
                }
            }
            "login" => {
                let usage = ShellError::Usage("login <email> <password>");
                let email = args.next().ok_or(usage.clone())?;
                let password = args.next().ok_or(usage)?;
                ShellCommand::LogIn {
                    email: email.to_string(),
                    password: password.to_string(),
                }
            }
            "logout" => ShellCommand::LogOut,
            "whoami" => ShellCommand::WhoAmI,
            "follow" => ShellCommand::Follow(single(&mut args, "follow <email>")?),
            "unfollow" => ShellCommand::Unfollow(single(&mut args, "unfollow <email>")?),
            "toggle" => ShellCommand::Toggle(single(&mut args, "toggle <username>")?),
            "post" => {
                let rest = rest.trim_start();
                let (url, description) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if url.is_empty() {
                    return Err(ShellError::Usage("post <url> [description...]"));
                }
                ShellCommand::Post {
                    url: url.to_string(),
                    description: description.trim().to_string(),
                }
            }
            "search" => ShellCommand::Search(rest.to_string()),
            "home" => ShellCommand::Search(String::new()),
            "all" => ShellCommand::Search("*".to_string()),
            "me" => {
                let username = current_username.ok_or(AppError::NotLoggedIn)?;
                ShellCommand::Search(format!("from:{username}"))
            }
            "user" => ShellCommand::Search(format!("from:{}", single(&mut args, "user <username>")?)),
            "users" => ShellCommand::Users,
            "help" => ShellCommand::Help,
            "exit" | "quit" => ShellCommand::Exit,
            other => return Err(ShellError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn single<'a>(args: &mut impl Iterator<Item = &'a str>, usage: &'static str) -> Result<String, ShellError> {
    args.next().map(str::to_string).ok_or(ShellError::Usage(usage))
}

/// Result of running one command against the app.
#[derive(Debug)]
pub enum Reply {
    Message(String),
    Search(SearchView),
    Profile(ProfileSummary),
    Users(UserList),
    Help,
    Exit,
    Nothing,
}

/// Applies one command to the app.
pub fn apply(app: &mut App, command: ShellCommand) -> Result<Reply, ShellError> {
    let reply = match command {
        ShellCommand::SignUp {
            email,
            password,
            username,
            name,
        } => {
            let account = match app.sign_up(&email, &password, &name, &username) {
                Ok(account) => account,
                Err(err) => return Err(notice_or(app, err)),
            };
            Reply::Message(format!(
                "Thank you for your registration, welcome {}!",
                account.username
            ))
        }
        ShellCommand::LogIn { email, password } => {
            let account = match app.log_in(&email, &password) {
                Ok(account) => account,
                Err(err) => return Err(notice_or(app, err)),
            };
            let greeting = account.name.clone().unwrap_or_else(|| account.username.clone());
            Reply::Message(format!("Welcome, {greeting}."))
        }
        ShellCommand::LogOut => {
            app.log_out();
            Reply::Message("You logged out, see you later".to_string())
        }
        ShellCommand::WhoAmI => {
            let account = app.current_user().ok_or(AppError::NotLoggedIn)?;
            Reply::Profile(ProfileSummary::from(account))
        }
        ShellCommand::Follow(email) => {
            app.follow(&email)?;
            Reply::Message(format!("You now follow {email}"))
        }
        ShellCommand::Unfollow(email) => {
            app.unfollow(&email)?;
            Reply::Message(format!("You no longer follow {email}"))
        }
        ShellCommand::Toggle(username) => {
            let following = app.toggle_follow(&username)?;
            let verb = if following { "now follow" } else { "no longer follow" };
            Reply::Message(format!("You {verb} {username}"))
        }
        ShellCommand::Post { url, description } => {
            let post = app.add_pic(&url, &description)?;
            Reply::Message(format!("Published {}", post.id))
        }
        ShellCommand::Search(query) => Reply::Search(app.search(&query)?.to_view()),
        ShellCommand::Users => Reply::Users(UserList(app.users().into_iter().map(str::to_string).collect())),
        ShellCommand::Help => Reply::Help,
        ShellCommand::Exit => Reply::Exit,
        ShellCommand::Blank => Reply::Nothing,
    };
    Ok(reply)
}

/// Auth failures are reported through the notice board, the way a
/// graphical frontend shows them for a few seconds.
fn notice_or(app: &App, err: AppError) -> ShellError {
    match app.notice(Instant::now()) {
        Some(notice) => ShellError::Notice(notice.to_string()),
        None => err.into(),
    }
}

pub fn handle_shell(args: ShellArgs, mut app: App, output: &OutputManager) -> Result<()> {
    let interactive = args.script.is_none() && io::stdin().is_terminal();
    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    if interactive {
        output.info(PROMPT);
    }

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read command")?;
        output.verbose(&format!("{}: {line}", line_no + 1));

        let current = app.current_user().map(|a| a.username.clone());
        let reply = ShellCommand::parse(&line, current.as_deref()).and_then(|command| apply(&mut app, command));

        match reply {
            Ok(Reply::Exit) => break,
            Ok(reply) => show(reply, output)?,
            Err(err @ ShellError::Usage(_)) => output.warning(&err.to_string()),
            Err(err) => output.error(&err.to_string()),
        }

        if interactive {
            print!("> ");
            io::stdout().flush().ok();
        }
    }

    output.success("You left the program, bye");
    Ok(())
}

fn show(reply: Reply, output: &OutputManager) -> Result<()> {
    match reply {
        Reply::Message(message) => output.success(&message),
        Reply::Search(view) => output.display(&view)?,
        Reply::Profile(profile) => output.display(&profile)?,
        Reply::Users(users) => output.display(&users)?,
        Reply::Help => {
            for (usage, description) in HELP {
                output.bullet(&format!("{usage:<48} {description}"));
            }
        }
        Reply::Exit | Reply::Nothing => {}
    }
    Ok(())
}
