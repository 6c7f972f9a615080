use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::{
    common::{
        command::Command,
        error::{AppError, InputError},
        input::{parse_account_id, parse_amount, parse_holder_name, MenuChoice},
        outcome::Outcome,
    },
    domain::ledger::Ledger,
    io::style::Styler,
    worker::processor::Processor,
};

/// The interactive menu loop.
///
/// Reads one line per answer from `input` and writes prompts and results to
/// `output`. End of input is treated the same as choosing Exit.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use bank_simulator::io::{prompt::Shell, style::Styler};
///
/// let input = Cursor::new("1\nAlice\n100\n4\n1\n6\n");
/// let mut output = Vec::new();
/// let mut shell = Shell::new(input, &mut output, Styler::plain());
/// shell.run().unwrap();
/// let opened = shell.ledger().len();
/// drop(shell);
/// assert_eq!(opened, 1);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Balance: 100.00"));
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    styler: Styler,
    ledger: Ledger,
    processor: Processor,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, styler: Styler) -> Self {
        Self {
            input,
            output,
            styler,
            ledger: Ledger::new(),
            processor: Processor::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.ask("Select an option: ")? else {
                break;
            };

            let choice = match answer.and_then(|a| a.parse::<MenuChoice>()) {
                Ok(choice) => choice,
                Err(e) => {
                    self.reject(e)?;
                    continue;
                }
            };
            debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                break;
            }

            let command = match self.collect(choice)? {
                Some(Ok(command)) => command,
                Some(Err(e)) => {
                    self.reject(e)?;
                    continue;
                }
                None => break,
            };

            let outcome = self.processor.process(&mut self.ledger, command)?;
            self.show(&outcome)?;
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        for (n, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", n + 1, choice.label())?;
        }
        Ok(())
    }

    /// Prints `question` and reads one trimmed line. `None` on end of input;
    /// a line that is not UTF-8 comes back as `InputError::NotUtf8`.
    fn ask(
        &mut self,
        question: &str,
    ) -> Result<Option<Result<String, InputError>>, AppError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let answer = String::from_utf8(line)
            .map(|text| text.trim().to_string())
            .map_err(|_| InputError::NotUtf8);
        Ok(Some(answer))
    }

    /// Gathers the fields a menu choice needs. The outer `None` means input
    /// ran out mid-way; the inner error means a field did not parse.
    fn collect(
        &mut self,
        choice: MenuChoice,
    ) -> Result<Option<Result<Command, InputError>>, AppError> {
        let command = match choice {
            MenuChoice::CreateAccount => {
                let Some(holder) = self.ask("Enter account holder name: ")? else {
                    return Ok(None);
                };
                let Some(initial) = self.ask("Enter initial balance: ")? else {
                    return Ok(None);
                };
                holder
                    .and_then(|h| parse_holder_name(&h))
                    .and_then(|holder| {
                        Ok(Command::CreateAccount {
                            holder,
                            initial: parse_amount(&initial?)?,
                        })
                    })
            }
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let Some(account) = self.ask("Enter account number: ")? else {
                    return Ok(None);
                };
                let question = if choice == MenuChoice::Deposit {
                    "Enter amount to deposit: "
                } else {
                    "Enter amount to withdraw: "
                };
                let Some(amount) = self.ask(question)? else {
                    return Ok(None);
                };
                account.and_then(|a| parse_account_id(&a)).and_then(|account| {
                    let amount = parse_amount(&amount?)?;
                    Ok(if choice == MenuChoice::Deposit {
                        Command::Deposit { account, amount }
                    } else {
                        Command::Withdraw { account, amount }
                    })
                })
            }
            MenuChoice::CheckBalance => {
                let Some(account) = self.ask("Enter account number: ")? else {
                    return Ok(None);
                };
                account
                    .and_then(|a| parse_account_id(&a))
                    .map(|account| Command::CheckBalance { account })
            }
            MenuChoice::ListAccounts => Ok(Command::ListAccounts),
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(command))
    }

    fn reject(&mut self, err: InputError) -> Result<(), AppError> {
        warn!(error = %err, "input rejected");
        self.show(&Outcome::from(err))
    }

    fn show(&mut self, outcome: &Outcome) -> Result<(), AppError> {
        writeln!(self.output, "{}", self.styler.render(outcome))?;
        Ok(())
    }
}
