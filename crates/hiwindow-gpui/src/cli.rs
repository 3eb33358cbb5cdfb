use clap::{ArgAction, Parser};
use hiwindow_core::{GREETING, Greeting, TITLE};

#[derive(Debug, Parser)]
#[command(
    name = "hiwindow",
    version,
    about = "Opens a small window that says hello",
    after_help = "Examples:\n  hiwindow                   Show the greeting window\n  hiwindow --headless        Print the window layout as JSON\n  hiwindow --title Hey -v    Use another title, log at info level"
)]
pub struct Args {
    /// Lay the window out without a display and print it as JSON
    #[arg(long)]
    pub headless: bool,

    /// Window title
    #[arg(long, value_name = "TEXT", default_value = TITLE)]
    pub title: String,

    /// Label text
    #[arg(long, value_name = "TEXT", default_value = GREETING)]
    pub text: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Anything else on the command line, flags included, is accepted and
    /// ignored.
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<String>,
}

impl Args {
    pub fn greeting(&self) -> Greeting {
        Greeting {
            title: self.title.clone(),
            text: self.text.clone(),
        }
    }
}
