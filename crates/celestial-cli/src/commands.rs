//! Report screen commands.

use celestial_oracle::domain::report::LuckScope;
use celestial_report::domain::elements::Element;
use thiserror::Error;

/// One line typed on the report screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCommand {
    /// `d`, `w`, `m`
    Tab(LuckScope),
    /// `h <element>` hovers; bare `h` clears.
    Hover(Option<Element>),
    /// `1` to `3`, stored zero-based.
    Open(usize),
    /// `x`
    Close,
    /// `r`
    Reset,
    /// `q`
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Unrecognised line.
    #[error("未知指令：{0}")]
    Unknown(String),

    /// `h` followed by something that is not an element.
    #[error("未知元素：{0}（可选 木 火 土 金 水）")]
    UnknownElement(String),
}

impl std::str::FromStr for ReportCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        match (head, rest) {
            ("d", "") => Ok(Self::Tab(LuckScope::Day)),
            ("w", "") => Ok(Self::Tab(LuckScope::Week)),
            ("m", "") => Ok(Self::Tab(LuckScope::Month)),
            ("h", "") => Ok(Self::Hover(None)),
            ("h", name) => name
                .parse()
                .map(|element| Self::Hover(Some(element)))
                .map_err(|_| CommandError::UnknownElement(name.to_owned())),
            ("1", "") => Ok(Self::Open(0)),
            ("2", "") => Ok(Self::Open(1)),
            ("3", "") => Ok(Self::Open(2)),
            ("x", "") => Ok(Self::Close),
            ("r", "") => Ok(Self::Reset),
            ("q", "") => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(line.to_owned())),
        }
    }
}
