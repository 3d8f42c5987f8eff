//! The interactive loop: collect a profile, run the reading cycle, present
//! the report, and start over on reset.

use std::io::Write;
use std::time::Duration;

use celestial_core::clock::Clock;
use celestial_core::gateway::NarrativeGateway;
use celestial_core::location::LocationProvider;
use celestial_core::profile::Profile;
use celestial_intake::domain::steps::IntakeStep;
use celestial_intake::domain::wizard::{Advance, IntakeWizard};
use celestial_oracle::application::command_handlers::handle_analyze_profile;
use celestial_oracle::domain::commands::AnalyzeProfile;
use celestial_oracle::domain::cycle::ReadingCycle;
use celestial_oracle::domain::reading::Reading;
use celestial_report::domain::presenter::PresenterState;
use celestial_report::domain::view::render;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::commands::ReportCommand;
use crate::error::CliError;
use crate::loading::with_loading;
use crate::terminal::{REPORT_HELP, ReportScreen, StepPrompt, TITLE};

/// Typed on a wizard step to go back one step.
const BACK: &str = "<";

enum Exit {
    Reset,
    Quit,
}

/// The boundaries one terminal session runs against.
pub struct Session<'a> {
    /// Time source for prompt timestamps.
    pub clock: &'a dyn Clock,
    /// Location source.
    pub locator: &'a dyn LocationProvider,
    /// Generative narrative service.
    pub gateway: &'a dyn NarrativeGateway,
    /// Upper bound on one location read.
    pub probe_timeout: Duration,
}

impl Session<'_> {
    /// Runs until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` when the terminal fails.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<(), CliError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut cycle = ReadingCycle::new();
        writeln!(out, "✦ {TITLE} ✦")?;

        loop {
            if let Some(notice) = cycle.notice() {
                writeln!(out, "\n{notice}")?;
            }
            let Some(profile) = collect_profile(&mut lines, out).await? else {
                return Ok(());
            };

            let command = AnalyzeProfile {
                correlation_id: Uuid::new_v4(),
                profile,
            };
            cycle.begin(command.correlation_id)?;
            writeln!(out)?;
            let outcome = with_loading(
                out,
                handle_analyze_profile(
                    &command,
                    self.clock,
                    self.locator,
                    self.gateway,
                    self.probe_timeout,
                ),
            )
            .await?;

            match outcome {
                Ok(reading) => cycle.complete(reading)?,
                Err(e) => {
                    warn!(
                        error = %e,
                        correlation_id = %command.correlation_id,
                        "reading cycle failed"
                    );
                    cycle.abort()?;
                    continue;
                }
            }

            let exit = match cycle.reading() {
                Some(reading) => present(reading, &mut lines, out).await?,
                None => Exit::Reset,
            };
            match exit {
                Exit::Reset => {
                    cycle.reset();
                }
                Exit::Quit => return Ok(()),
            }
        }
    }
}

/// Walks the wizard. `None` means input ended before submission.
async fn collect_profile<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Option<Profile>, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut wizard = IntakeWizard::new();

    loop {
        let step = wizard.step();
        let current = match step {
            IntakeStep::Name => wizard.draft().name.clone(),
            IntakeStep::BirthDate => wizard.draft().birth_date.clone(),
            IntakeStep::BirthTime => wizard.draft().birth_time.clone(),
        };
        write!(
            out,
            "{}",
            StepPrompt {
                step,
                current: &current,
            }
        )?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        let entry = line.trim();
        if entry == BACK {
            wizard.retreat();
            continue;
        }
        if !entry.is_empty() {
            match step {
                IntakeStep::Name => wizard.set_name(entry),
                IntakeStep::BirthDate => wizard.set_birth_date(entry),
                IntakeStep::BirthTime => wizard.set_birth_time(entry),
            }
        }

        match wizard.advance() {
            Advance::Moved(next) => debug!(step = next.number(), "wizard moved"),
            Advance::Blocked(_) => writeln!(out, "此项不能为空")?,
            Advance::Submitted(profile) => return Ok(Some(profile)),
            Advance::Finished => return Ok(None),
        }
    }
}

/// Shows the report and handles commands until reset or quit.
async fn present<R, W>(
    reading: &Reading,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Exit, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = PresenterState::new();
    debug!(source = ?reading.source, "presenting report");

    loop {
        let view = render(&reading.report, reading.profile.location.as_ref(), &state);
        write!(
            out,
            "{}",
            ReportScreen { view: &view }
        )?;
        write!(out, "\n{REPORT_HELP}\n> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(Exit::Quit);
        };
        match line.parse::<ReportCommand>() {
            Ok(ReportCommand::Tab(scope)) => state.select_tab(scope),
            Ok(ReportCommand::Hover(Some(element))) => state.hover(element),
            Ok(ReportCommand::Hover(None)) => state.clear_hover(),
            Ok(ReportCommand::Open(index)) => {
                state.open(&reading.report, index);
            }
            Ok(ReportCommand::Close) => state.close(),
            Ok(ReportCommand::Reset) => return Ok(Exit::Reset),
            Ok(ReportCommand::Quit) => return Ok(Exit::Quit),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::location::Coordinates;
    use celestial_test_support::{
        CannedGateway, FailingGateway, FailingLocator, FixedClock, FixedLocator,
        valid_report_json,
    };
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    async fn run(session: &Session<'_>, input: &str) -> String {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_full_session_presents_selected_action() {
        // Arrange
        let clock = clock();
        let locator = FixedLocator(Coordinates::new(30.66, 104.06));
        let gateway = CannedGateway::json(&valid_report_json());
        let session = Session {
            clock: &clock,
            locator: &locator,
            gateway: &gateway,
            probe_timeout: Duration::from_millis(50),
        };

        // Act
        let text = run(&session, "晓\n1990-05-01\n\nw\n2\nq\n").await;

        // Assert
        assert!(text.contains("【本周】"));
        assert!(text.contains("┌ 本周行动二"));
        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains("出生：1990-05-01 12:00"));
        assert!(requests[0].prompt.contains("经纬度 (30.66, 104.06)"));
    }

    #[tokio::test]
    async fn test_back_returns_to_previous_step() {
        let clock = clock();
        let gateway = CannedGateway::json(&valid_report_json());
        let session = Session {
            clock: &clock,
            locator: &FailingLocator,
            gateway: &gateway,
            probe_timeout: Duration::from_millis(50),
        };

        run(&session, "晓\n<\n明\n1990-05-01\n08:30\nq\n").await;

        let requests = gateway.requests();
        assert!(requests[0].prompt.starts_with("行者：明 | 出生：1990-05-01 08:30"));
        assert!(requests[0].prompt.ends_with("位置：未知地点"));
    }

    #[tokio::test]
    async fn test_blank_name_is_blocked_until_entered() {
        let clock = clock();
        let gateway = CannedGateway::json(&valid_report_json());
        let session = Session {
            clock: &clock,
            locator: &FailingLocator,
            gateway: &gateway,
            probe_timeout: Duration::from_millis(50),
        };

        let text = run(&session, "\n晓\n1990-05-01\n\nq\n").await;

        assert!(text.contains("此项不能为空"));
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_returns_to_wizard() {
        let clock = clock();
        let gateway = FailingGateway::new();
        let session = Session {
            clock: &clock,
            locator: &FailingLocator,
            gateway: &gateway,
            probe_timeout: Duration::from_millis(50),
        };

        let text = run(&session, "晓\n1990-05-01\n\nr\n").await;

        assert_eq!(text.matches(IntakeStep::Name.title()).count(), 2);
        assert_eq!(gateway.attempts(), 1);
    }

    #[tokio::test]
    async fn test_fallback_screen_looks_like_oracle_screen() {
        // Arrange
        let clock = clock();
        let oracle = CannedGateway::json(&valid_report_json());
        let failing = FailingGateway::new();
        let oracle_session = Session {
            clock: &clock,
            locator: &FailingLocator,
            gateway: &oracle,
            probe_timeout: Duration::from_millis(50),
        };
        let fallback_session = Session {
            gateway: &failing,
            ..oracle_session
        };
        let input = "晓\n1990-05-01\n\nq\n";

        // Act
        let from_oracle = run(&oracle_session, input).await;
        let from_fallback = run(&fallback_session, input).await;

        // Assert
        let frame = |text: &str| -> Vec<String> {
            text.lines()
                .filter(|line| line.starts_with("══") || line.starts_with("时空坐标"))
                .map(|line| line.split("    ").next().unwrap_or_default().to_owned())
                .collect()
        };
        assert_eq!(frame(&from_oracle), frame(&from_fallback));
        assert!(from_fallback.contains(REPORT_HELP));
        assert_eq!(failing.attempts(), 1);
    }
}
