//! Header commands as data.
//!
//! Lets a headless driver replay the same clicks a player would make:
//! `open:scanner close:scanner route:/store logout`.

use std::fmt;
use std::str::FromStr;

use crate::error::EcoError;
use crate::header::HeaderOrchestrator;
use crate::nav::Navigator;
use crate::overlay::OverlayId;
use crate::session::SessionProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderCommand {
    Open(OverlayId),
    Close(OverlayId),
    CloseAll,
    Route(String),
    Logout,
}

impl FromStr for HeaderCommand {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("open", target)) => Ok(HeaderCommand::Open(target.parse()?)),
            Some(("close", target)) => Ok(HeaderCommand::Close(target.parse()?)),
            Some(("route", path)) if path.starts_with('/') => {
                Ok(HeaderCommand::Route(path.to_string()))
            }
            None if s == "close-all" => Ok(HeaderCommand::CloseAll),
            None if s == "logout" => Ok(HeaderCommand::Logout),
            _ => Err(EcoError::InvalidCommand(s.to_string())),
        }
    }
}

impl fmt::Display for HeaderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderCommand::Open(id) => write!(f, "open:{}", id),
            HeaderCommand::Close(id) => write!(f, "close:{}", id),
            HeaderCommand::CloseAll => f.write_str("close-all"),
            HeaderCommand::Route(path) => write!(f, "route:{}", path),
            HeaderCommand::Logout => f.write_str("logout"),
        }
    }
}

impl<S, N> HeaderOrchestrator<S, N>
where
    S: SessionProvider,
    N: Navigator,
{
    /// Dispatch one command to the matching operation.
    pub fn apply(&mut self, command: &HeaderCommand) {
        match command {
            HeaderCommand::Open(id) => self.open(*id),
            HeaderCommand::Close(id) => self.close(*id),
            HeaderCommand::CloseAll => self.close_all(),
            HeaderCommand::Route(path) => {
                self.navigator_mut().navigate_to(path);
                self.on_route_changed();
            }
            HeaderCommand::Logout => self.logout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            "open:scanner".parse::<HeaderCommand>().unwrap(),
            HeaderCommand::Open(OverlayId::Scanner)
        );
        assert_eq!(
            "close:streak".parse::<HeaderCommand>().unwrap(),
            HeaderCommand::Close(OverlayId::StreakCalendar)
        );
        assert_eq!(
            "close-all".parse::<HeaderCommand>().unwrap(),
            HeaderCommand::CloseAll
        );
        assert_eq!(
            "route:/store".parse::<HeaderCommand>().unwrap(),
            HeaderCommand::Route("/store".into())
        );
        assert_eq!("logout".parse::<HeaderCommand>().unwrap(), HeaderCommand::Logout);
    }

    #[test]
    fn reject_bad_commands() {
        assert!(matches!(
            "jump".parse::<HeaderCommand>(),
            Err(EcoError::InvalidCommand(_))
        ));
        assert!(matches!(
            "route:store".parse::<HeaderCommand>(),
            Err(EcoError::InvalidCommand(_))
        ));
        assert!(matches!(
            "open:radar".parse::<HeaderCommand>(),
            Err(EcoError::UnknownOverlay(_))
        ));
    }

    #[test]
    fn display_matches_parse() {
        for raw in ["open:scanner", "close:streak-calendar", "close-all", "route:/about", "logout"] {
            let cmd: HeaderCommand = raw.parse().unwrap();
            assert_eq!(cmd.to_string(), raw);
        }
    }
}
