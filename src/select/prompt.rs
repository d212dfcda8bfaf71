//! Interactive adapter selection over a line-based console.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use crate::network::AdapterRecord;

use super::SelectionSet;

const GUIDANCE: &str = "\n--- Adapter Selection ---\n\
You can apply interface-specific TCP tweaks (like disabling Nagle, immediate ACKs) to one or more adapters.\n\
It's generally recommended for your primary physical gaming adapters (Ethernet, Wi-Fi).\n\
It's generally NOT recommended for virtual adapters (like VPNs, e.g., WireSock) unless you're sure.";

const FIRST_PROMPT: &str = "\nEnter the number of the adapter you want to apply interface-specific tweaks to \
(or type 'skip' to not apply to any specific interface): ";

const ADD_ANOTHER_PROMPT: &str = "  Do you want to add another adapter? (yes/no): ";

/// One parsed line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Done,
    Skip,
    Number(i64),
    Invalid,
}

impl Choice {
    /// Parses an already trimmed, lower-cased line.
    ///
    /// Integers beyond `i64` are still numbers; they saturate and are then
    /// rejected as out of range.
    fn parse(line: &str) -> Self {
        match line {
            "done" => Self::Done,
            "skip" => Self::Skip,
            other => match other.parse::<i64>() {
                Ok(n) => Self::Number(n),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => Self::Number(i64::MAX),
                    IntErrorKind::NegOverflow => Self::Number(i64::MIN),
                    _ => Self::Invalid,
                },
            },
        }
    }
}

/// Runs the adapter selection dialogue on a reader/writer pair.
///
/// Production code uses locked stdin/stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct Selector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Selector<R, W> {
    /// Creates a selector reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the selector, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Lets the operator pick adapters for interface-specific tweaks.
    ///
    /// Returns an empty selection when `adapters` is empty (without
    /// prompting), on `skip`, or on `done` with nothing selected.
    ///
    /// The loop ends only on `done`, `skip`, once every adapter is selected,
    /// after a negative answer to the "add another?" question that follows
    /// the first selection, or at end of input (treated as `done`).
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn select_guids(&mut self, adapters: &[AdapterRecord]) -> io::Result<SelectionSet> {
        if adapters.is_empty() {
            writeln!(
                self.output,
                "No network adapters with GUIDs were found or an error occurred."
            )?;
            return Ok(SelectionSet::new());
        }

        self.print_adapters(adapters)?;

        let mut selected = SelectionSet::new();
        loop {
            self.prompt(&selected)?;

            let choice = match self.read_line()? {
                Some(line) => Choice::parse(&line),
                None => {
                    writeln!(self.output)?;
                    tracing::debug!("Input closed; finishing selection");
                    Choice::Done
                }
            };

            match choice {
                Choice::Done => {
                    if selected.is_empty() {
                        writeln!(
                            self.output,
                            "No specific adapters selected for interface-specific tweaks."
                        )?;
                    }
                    return Ok(selected);
                }
                Choice::Skip => {
                    writeln!(
                        self.output,
                        "Skipping interface-specific tweaks for all adapters."
                    )?;
                    return Ok(SelectionSet::new());
                }
                Choice::Number(n) => {
                    let Some(adapter) = index(adapters, n) else {
                        writeln!(
                            self.output,
                            "  Invalid selection. Please enter a number between 1 and {}.",
                            adapters.len()
                        )?;
                        continue;
                    };

                    if self.pick(&mut selected, adapter, adapters.len())? {
                        return Ok(selected);
                    }
                }
                Choice::Invalid => {
                    writeln!(
                        self.output,
                        "  Invalid input. Please enter a number, 'skip', or 'done'."
                    )?;
                }
            }
        }
    }

    /// Adds `adapter` to the selection. Returns `true` if the loop should end.
    fn pick(
        &mut self,
        selected: &mut SelectionSet,
        adapter: &AdapterRecord,
        available: usize,
    ) -> io::Result<bool> {
        let added = selected.insert(adapter.interface_id.as_str());
        if added {
            writeln!(
                self.output,
                "  Added: '{}' - {}",
                adapter.display_name(),
                adapter.interface_id
            )?;
        } else {
            writeln!(
                self.output,
                "  Adapter '{}' already selected.",
                adapter.display_name()
            )?;
        }

        if selected.len() == available {
            writeln!(
                self.output,
                "All available adapters with GUIDs have been selected."
            )?;
            return Ok(true);
        }

        // Only the first selection asks this; later ones go straight back
        // to the number prompt.
        if added && selected.len() == 1 {
            return Ok(!self.confirm(ADD_ANOTHER_PROMPT)?);
        }

        Ok(false)
    }

    fn print_adapters(&mut self, adapters: &[AdapterRecord]) -> io::Result<()> {
        writeln!(
            self.output,
            "\nAvailable Network Adapters (select for interface-specific tweaks):"
        )?;
        for (i, adapter) in adapters.iter().enumerate() {
            writeln!(self.output, "  {}: {adapter}", i + 1)?;
        }
        writeln!(self.output, "{GUIDANCE}")
    }

    fn prompt(&mut self, selected: &SelectionSet) -> io::Result<()> {
        if selected.is_empty() {
            write!(self.output, "{FIRST_PROMPT}")?;
        } else {
            write!(
                self.output,
                "\nSelected GUIDs: {selected}\nEnter the number of another adapter, or type 'done' if finished: "
            )?;
        }
        self.output.flush()
    }

    /// Asks a yes/no question. Anything but `yes`/`y` (including end of input) is "no".
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.as_str(), "yes" | "y")))
    }

    /// Reads one trimmed, lower-cased line. Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

/// Resolves a 1-based menu number.
fn index(adapters: &[AdapterRecord], n: i64) -> Option<&AdapterRecord> {
    let n = usize::try_from(n).ok()?;
    adapters.get(n.checked_sub(1)?)
}

/// Runs [`Selector::select_guids`] on the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn select_guids(adapters: &[AdapterRecord]) -> io::Result<SelectionSet> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Selector::new(stdin.lock(), stdout.lock()).select_guids(adapters)
}
