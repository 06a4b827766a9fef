use std::ffi::OsString;

use anyhow::Context as _;
use clap::clap_derive::ValueEnum;
use clap::{Parser, Subcommand};
use hidefi::keycode::UsageCode;
use hidefi::layout::LayoutId;

#[derive(Clone, Debug)]
pub struct Config {
    pub log_file: Option<String>,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show {
        layout: LayoutId,
        highlight: Option<UsageCode>,
    },
    Lookup {
        code: UsageCode,
        layout: Option<LayoutId>,
    },
    Table,
    Check,
    Browse,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LayoutArg {
    Ansi,
    Iso,
    Jis,
}

impl LayoutArg {
    fn parse(layout: LayoutArg) -> LayoutId {
        match layout {
            LayoutArg::Ansi => LayoutId::Ansi,
            LayoutArg::Iso => LayoutId::Iso,
            LayoutArg::Jis => LayoutId::Jis,
        }
    }
}

/// USB HID usage code to UEFI key viewer
#[derive(Parser, Debug)]
#[clap(about = "USB HID to UEFI/EDK2 keyboard code viewer")]
#[clap(version, long_about = None)]
struct Args {
    /// A file with viewer logs
    #[clap(short, long, value_parser)]
    log_file: Option<String>,

    #[clap(subcommand)]
    command: ArgsCommand,
}

#[derive(Subcommand, Debug)]
enum ArgsCommand {
    /// Draw a keyboard layout
    Show {
        /// The physical layout to draw
        #[clap(short, long, value_enum, default_value_t = LayoutArg::Ansi)]
        layout: LayoutArg,

        /// Highlight every placement of this usage code (0x28 or 40)
        #[clap(long, value_parser)]
        highlight: Option<UsageCode>,
    },
    /// Show the info panel for a usage code
    Lookup {
        /// Usage code on the keyboard page (0x28 or 40)
        #[clap(value_parser)]
        code: UsageCode,

        /// Also list the positions of the key on this layout
        #[clap(short, long, value_enum)]
        layout: Option<LayoutArg>,
    },
    /// List the whole key table
    Table,
    /// Check that every layout placement resolves in the key table
    Check,
    /// Interactively pick a layout and query keys
    Browse,
}

impl ArgsCommand {
    fn into_command(self) -> Command {
        match self {
            ArgsCommand::Show { layout, highlight } => Command::Show {
                layout: LayoutArg::parse(layout),
                highlight,
            },
            ArgsCommand::Lookup { code, layout } => Command::Lookup {
                code,
                layout: layout.map(LayoutArg::parse),
            },
            ArgsCommand::Table => Command::Table,
            ArgsCommand::Check => Command::Check,
            ArgsCommand::Browse => Command::Browse,
        }
    }
}

impl Config {
    pub fn parse_args() -> anyhow::Result<Self> {
        let args = Args::parse();
        Ok(Self::from_args(args))
    }

    /// Same as [`Config::parse_args`], from an explicit argument list (first item is the binary name).
    pub fn parse_from<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args).context("invalid arguments")?;
        Ok(Self::from_args(args))
    }

    fn from_args(args: Args) -> Self {
        Self {
            log_file: args.log_file,
            command: args.command.into_command(),
        }
    }
}
